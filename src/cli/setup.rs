use clap::Parser;

/// Arguments for the setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Provision the environment:\n    voicepack setup\n\n\
                  Verify imports after installing:\n    voicepack setup --check\n\n\
                  Show what would be done:\n    voicepack setup --dry-run")]
pub struct SetupArgs {
    /// Run import smoke checks after installing dependencies
    #[arg(long)]
    pub check: bool,

    /// Show planned actions without executing them
    #[arg(long)]
    pub dry_run: bool,
}
