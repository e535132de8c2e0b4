use clap::Parser;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Freeze into a one-directory bundle and zip it:\n    voicepack build\n\n\
                  Produce a single-file executable instead:\n    voicepack build --onefile\n\n\
                  Show the PyInstaller invocation:\n    voicepack build --dry-run")]
pub struct BuildArgs {
    /// Produce a single-file executable (overrides the manifest)
    #[arg(long)]
    pub onefile: bool,

    /// Show planned actions without executing them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_build_onefile() {
        let cli = Cli::try_parse_from(["voicepack", "build", "--onefile"]).unwrap();
        match cli.command {
            Commands::Build(args) => assert!(args.onefile),
            _ => panic!("Expected Build command"),
        }
    }
}
