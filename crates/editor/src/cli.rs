// Chunk: docs/chunks/edit_cli - Edit script loading and command-line front end

//! Command-line front end: apply an edit script to a file, or show the
//! splices it would produce.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineedit_buffer::TextBuffer;
use tracing::info;

use crate::config::{save_config, write_atomically, Config};
use crate::script::load_script;

#[derive(Debug, Parser)]
#[command(name = "lineedit", version, about = "Apply whole-line edit batches to text files")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply an edit script to a file as one batch.
    Apply {
        /// File to edit.
        file: PathBuf,
        /// JSON edit script.
        #[arg(long, short, value_name = "SCRIPT")]
        edits: PathBuf,
        /// Write the result here instead of over FILE.
        #[arg(long, short, value_name = "PATH", conflicts_with = "dry_run")]
        output: Option<PathBuf>,
        /// Print the result to stdout and leave FILE untouched.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the character splices an edit script produces for a file, as JSON.
    Translate {
        file: PathBuf,
        #[arg(long, short, value_name = "SCRIPT")]
        edits: PathBuf,
    },
    /// Print the effective config, or write it to the config file.
    Config {
        /// Save the effective config to the config file.
        #[arg(long)]
        write: bool,
    },
}

/// Runs a parsed command. Normal output goes to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Apply {
            file,
            edits,
            output,
            dry_run,
        } => {
            let result = apply_script(file, edits)?;
            if *dry_run {
                out.write_all(result.as_bytes())?;
                return Ok(());
            }
            let target = output.as_deref().unwrap_or(file);
            if config.backup && target == file.as_path() {
                let backup = backup_path(file);
                fs::copy(file, &backup)
                    .with_context(|| format!("failed to back up {}", file.display()))?;
                info!(backup = %backup.display(), "kept original");
            }
            write_atomically(target, &result)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(file = %target.display(), "wrote edited file");
        }
        Command::Translate { file, edits } => {
            let buffer = load_buffer(file)?;
            let script = load_script(edits)?;
            let range_edits = script.to_range_edits(buffer.line_count());
            serde_json::to_writer_pretty(&mut *out, &range_edits)?;
            writeln!(out)?;
        }
        Command::Config { write } => {
            if *write {
                let path = save_config(config, cli.config.as_deref())?;
                writeln!(out, "{}", path.display())?;
            } else {
                serde_json::to_writer_pretty(&mut *out, config)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Loads `file`, applies the edit script at `script` in one batch, and
/// returns the edited content.
pub fn apply_script(file: &Path, script: &Path) -> Result<String> {
    let mut buffer = load_buffer(file)?;
    let edits = load_script(script)?;
    edits
        .apply(&mut buffer)
        .with_context(|| format!("failed to apply {} to {}", script.display(), file.display()))?;
    Ok(buffer.content())
}

fn load_buffer(file: &Path) -> Result<TextBuffer> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    Ok(TextBuffer::from_str(&content))
}

fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".orig");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_apply_with_dry_run() {
        let cli = Cli::parse_from(["lineedit", "apply", "doc.txt", "--edits", "e.json", "--dry-run"]);
        match cli.command {
            Command::Apply {
                file,
                edits,
                output,
                dry_run,
            } => {
                assert_eq!(file, PathBuf::from("doc.txt"));
                assert_eq!(edits, PathBuf::from("e.json"));
                assert_eq!(output, None);
                assert!(dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_output_conflicts_with_dry_run() {
        let result = Cli::try_parse_from([
            "lineedit", "apply", "doc.txt", "-e", "e.json", "-o", "out.txt", "--dry-run",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/tmp/notes.txt")),
            PathBuf::from("/tmp/notes.txt.orig")
        );
    }
}
