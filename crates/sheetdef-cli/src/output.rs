//! Encoded output writing.
//!
//! The generated source is produced as UTF-8 text; this module transcodes
//! it to the requested destination encoding (a WHATWG label such as
//! `utf-8`, `gbk`, or `shift_jis`) and writes it in one shot. Characters
//! the target encoding cannot represent are replaced, with a warning, so a
//! narrow legacy encoding never aborts a generation run that already
//! succeeded.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, warn};

use sheetdef_core::{Error, Result};

/// Resolves a WHATWG encoding label to its encoding.
///
/// Labels are matched case-insensitively after trimming, so `UTF-8`,
/// `utf-8`, and ` utf-8 ` all resolve to UTF-8.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an unknown label.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::InvalidArgument(format!("unknown encoding label: '{label}'")))
}

/// Writes `text` to `path` in the given encoding. Returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns [`Error::WriteError`] when the file cannot be written. The
/// generated text itself is unaffected by a failed write.
pub fn write_source(path: &Path, text: &str, encoding: &'static Encoding) -> Result<usize> {
    let (bytes, actual_encoding, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        warn!(
            encoding = actual_encoding.name(),
            "output contains characters the target encoding cannot represent; they were replaced"
        );
    }

    fs::write(path, &bytes).map_err(|source| Error::WriteError {
        path: path.display().to_string(),
        source,
    })?;

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = actual_encoding.name(),
        "wrote generated source"
    );
    Ok(bytes.len())
}
