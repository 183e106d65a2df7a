use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::prelude::{SignalError, SignalResult};

pub const DEFAULT_PREFIX: &str = "sin_data_noisy";
pub const EXTENSION: &str = "csv";

/// File name for a series of `length` values, e.g. `sin_data_noisy_300.csv`.
pub fn output_filename(prefix: &str, length: usize) -> String {
    format!("{prefix}_{length}.{EXTENSION}")
}

/// Plain decimal rendering that always keeps a fractional part.
///
/// `Display` for `f64` never switches to exponent notation, but drops the
/// `.0` on integral values.
pub fn format_value(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Writes one value per `\n`-terminated row, no header.
pub fn write_series<W: Write>(writer: &mut W, values: &[f64]) -> io::Result<()> {
    for value in values {
        writeln!(writer, "{}", format_value(*value))?;
    }
    Ok(())
}

/// Writes `values` to `dir/{prefix}_{length}.csv` and returns the path.
///
/// An existing file is truncated. A failed write may leave a partial file
/// behind.
pub fn save_to_csv(
    dir: &Path,
    values: &[f64],
    length: usize,
    prefix: &str,
) -> SignalResult<PathBuf> {
    let path = dir.join(output_filename(prefix, length));
    let io_err = |source| SignalError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_series(&mut writer, values).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!("wrote {} rows to {}", values.len(), path.display());
    Ok(path)
}
