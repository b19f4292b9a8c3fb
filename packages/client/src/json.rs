//! JSON output for parsed articles.
//!
//! Available with the `json` cargo feature so the parsing core itself
//! carries no output-format dependency.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::Article;

/// Serialize an article to a compact JSON string.
pub fn to_json(article: &Article) -> Result<String> {
    Ok(serde_json::to_string(article)?)
}

/// Serialize an article to a human-readable JSON string.
pub fn to_json_pretty(article: &Article) -> Result<String> {
    Ok(serde_json::to_string_pretty(article)?)
}

/// Serialize an article and write it to a file.
pub fn save_json(article: &Article, path: &Path) -> Result<()> {
    let json = to_json_pretty(article)?;
    fs::write(path, json)?;
    Ok(())
}
