use chrono::Local;
use clap::Parser;
use daily_readings::application::GenerateService;
use daily_readings::cli::{write_document, Cli};
use daily_readings::domain::DateArgument;
use daily_readings::error::ReadingsError;
use daily_readings::infrastructure::{Config, HttpClient, OcaClient, OrthocalClient};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "daily_readings=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ReadingsError> {
    // Validate the date before touching config or network
    let date = DateArgument::parse(&cli.date)?.resolve(Local::now().date_naive());

    let config = Config::load(cli.config.as_deref())?;
    let http = HttpClient::new(&config)?;
    let oca = OcaClient::new(http.clone(), &config.oca_base_url);
    let orthocal = OrthocalClient::new(http, &config.orthocal_base_url);

    let service = GenerateService::new(oca.clone(), oca, orthocal, config.footer);
    let document = service.execute(date)?;

    write_document(&document, cli.output.as_deref())
}
