use clap::Parser;

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Review and confirm deletions:\n    voicepack clean\n\n\
                  Delete without confirmation:\n    voicepack clean -y")]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
