use clap::Parser;
use std::path::PathBuf;

/// Arguments for the archive command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Archive the project into <dir-name>.zip:\n    voicepack archive\n\n\
                  Write to a specific path:\n    voicepack archive --output releases/source.zip")]
pub struct ArchiveArgs {
    /// Output archive path (defaults to <project-dir-name>.zip in the project root)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
