//! Output destination handling

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the document to `path`, or to stdout when no path is given
pub fn write_document(document: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, document)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
