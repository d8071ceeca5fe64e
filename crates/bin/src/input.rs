//! Loading the input document.

use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use nested::{Value, codec};

/// Decode the document from `path`, or from stdin when no path is given.
pub fn load(path: Option<&Path>) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match path {
        Some(path) => {
            tracing::debug!("Reading document from {}", path.display());
            let file = File::open(path)
                .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
            codec::decode_reader(BufReader::new(file))?
        }
        None => {
            tracing::debug!("Reading document from stdin");
            codec::decode_reader(io::stdin().lock())?
        }
    };
    tracing::debug!(kind = value.type_name(), "Document loaded");
    Ok(value)
}
