//! Integer Stream Export
//!
//! Writes quantized code streams as flat text: one signed integer per line,
//! no header, no delimiter beyond the newline. This is the exchange format
//! the downstream (FPGA testbench) side consumes. Files are created fresh on
//! every write — overwrite, never append.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Write `codes` to `path`, one integer per line, overwriting any existing
/// file.
pub fn write_stream(path: &Path, codes: &[i32]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for code in codes {
        writeln!(writer, "{code}")?;
    }
    writer.flush()?;
    debug!(path = %path.display(), lines = codes.len(), "wrote code stream");
    Ok(())
}

/// Read a stream written by [`write_stream`] back into memory.
///
/// Used by tests and verification tooling; malformed lines surface as
/// `InvalidData` I/O errors.
pub fn read_stream(path: &Path) -> Result<Vec<i32>> {
    let reader = BufReader::new(File::open(path)?);
    let mut codes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let code = line.trim().parse::<i32>().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("bad code line {:?}: {e}", line),
            )
        })?;
        codes.push(code);
    }
    Ok(codes)
}
