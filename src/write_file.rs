use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::AppError;

/// Write the in-memory export lines to `path`, one per line.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::IO(format!("create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| AppError::IO(format!("write {}: {}", path.display(), e)))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::IO(format!("flush {}: {}", path.display(), e)))?;

    info!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
