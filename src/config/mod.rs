pub mod rules;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "speaker-registration")]
#[command(about = "Validate and register a conference speaker submission")]
pub struct CliConfig {
    #[arg(long, help = "Path to the speaker submission (JSON)")]
    pub speaker: PathBuf,

    #[arg(long, help = "Path to a TOML file overriding the registration rules")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Append registered speakers to this JSON Lines file")]
    pub store: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
