//! Response delivery: stdout rendering or whole-file overwrite.

use crate::fetch::{FetchError, ResponseFormat};
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where a response body goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Print the body to the writer (normally stdout).
    Stdout,
    /// Overwrite the named file with the verbatim body.
    File(PathBuf),
}

/// Delivers a response body.
///
/// For `Stdout`, writes a `REST <url>:` (or `REST JSON <url>:`) header line,
/// the body, and a trailing blank line to `out`. For `File`, overwrites the
/// file with the verbatim body and writes only a confirmation line to `out`.
pub fn deliver(
    out: &mut dyn Write,
    url: &str,
    format: ResponseFormat,
    body: &[u8],
    target: &OutputTarget,
) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            writeln!(out, "{} {}:", format.label(), url)?;
            out.write_all(body)?;
            if !body.ends_with(b"\n") {
                out.write_all(b"\n")?;
            }
            writeln!(out)?;
        }
        OutputTarget::File(path) => {
            fs::write(path, body).map_err(|source| FetchError::FileWrite {
                path: path.clone(),
                source,
            })?;
            writeln!(
                out,
                "{} {} is in file {}.",
                format.label(),
                url,
                path.display()
            )?;
        }
    }
    Ok(())
}
