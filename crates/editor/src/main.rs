// Chunk: docs/chunks/edit_cli - Edit script loading and command-line front end
//!
//! lineedit: apply whole-line edit scripts to text files.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use lineedit::cli::{self, Cli};
use lineedit::config::{load_config, ConfigSource};
use lineedit::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;
    logging::init_global(&config.log_level);

    match &source {
        ConfigSource::Defaults => debug!("using default config"),
        ConfigSource::File(path) => debug!(path = %path.display(), "loaded config"),
        ConfigSource::Discarded {
            path,
            schema_version,
        } => warn!(
            path = %path.display(),
            schema_version,
            "ignoring config written for another schema version"
        ),
    }

    cli::run(&cli, &config, &mut std::io::stdout().lock())
}
