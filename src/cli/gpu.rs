use clap::Parser;

/// Arguments for the gpu command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install CUDA torch and stage the runtime libraries:\n    voicepack gpu\n\n\
                  Stage the cuDNN libraries as well:\n    voicepack gpu --extended\n\n\
                  Show what would be done:\n    voicepack gpu --dry-run")]
pub struct GpuArgs {
    /// Stage the extended library set (adds cuDNN)
    #[arg(long)]
    pub extended: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show planned actions without executing them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_gpu_defaults() {
        let cli = Cli::try_parse_from(["voicepack", "gpu"]).unwrap();
        match cli.command {
            Commands::Gpu(args) => {
                assert!(!args.extended);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Gpu command"),
        }
    }
}
