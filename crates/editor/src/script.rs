// Chunk: docs/chunks/edit_cli - Edit script loading and command-line front end

//! Edit scripts: JSON arrays of line edits.
//!
//! ```json
//! [
//!   {"range": {"start_line_number": 2, "line_count": 1}, "new_lines": ["X", "Y"]},
//!   {"range": {"start_line_number": 5, "line_count": 0}, "new_lines": ["inserted"]}
//! ]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::editing::LineEdits;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read edit script {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid edit script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses an edit script from JSON text.
pub fn parse_script(json: &str) -> Result<LineEdits, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the edit script at `path`.
pub fn load_script(path: &Path) -> Result<LineEdits, ScriptError> {
    let json = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let edits = parse_script(&json)?;
    debug!(path = %path.display(), edits = edits.len(), "loaded edit script");
    Ok(edits)
}
