//! Writing the bid to the local output file.
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use quote_common::Result;
use tempfile::NamedTempFile;

/// Default output file name.
pub const OUTPUT_FILE: &str = "cotacao.txt";
/// Text written in front of the bid.
pub const OUTPUT_LABEL: &str = "Dólar: ";

/// Replace `path` with `Dólar: <bid>`, creating it if needed.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old file or the complete
/// new one, never a truncated one.
pub async fn write_bid(path: &Path, bid: &str) -> Result<()> {
    let path = path.to_path_buf();
    let content = format!("{OUTPUT_LABEL}{bid}");
    tokio::task::spawn_blocking(move || replace_file(&path, content.as_bytes()))
        .await
        .map_err(io::Error::other)?
}

fn replace_file(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
