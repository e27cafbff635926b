use assert_cmd::Command;

pub fn readings_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daily-readings").unwrap();
    cmd.env_remove("DAILY_READINGS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
