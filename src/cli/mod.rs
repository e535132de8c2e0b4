//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - setup: Environment provisioner arguments
//! - gpu: GPU acceleration installer arguments
//! - build: Executable packager arguments
//! - archive: Release archiver arguments
//! - clean: Workspace cleaner arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod archive;
pub mod build;
pub mod clean;
pub mod completions;
pub mod gpu;
pub mod setup;

pub use archive::ArchiveArgs;
pub use build::BuildArgs;
pub use clean::CleanArgs;
pub use completions::CompletionsArgs;
pub use gpu::GpuArgs;
pub use setup::SetupArgs;

/// Voicepack - build and release pipeline for the Voice Tools desktop app
#[derive(Parser, Debug)]
#[command(
    name = "voicepack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build and release pipeline for the Voice Tools desktop app",
    long_about = "Voicepack provisions the isolated Python environment, installs GPU-accelerated \
                  inference dependencies, freezes the desktop application into a distributable \
                  bundle, and assembles filtered release archives, all driven by one declarative \
                  manifest (voicepack.yaml).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  voicepack setup                \x1b[90m# Provision venv and install dependencies\x1b[0m\n   \
                  voicepack gpu --extended       \x1b[90m# Swap in CUDA torch and stage cuDNN too\x1b[0m\n   \
                  voicepack build                \x1b[90m# Freeze the app into dist/ and zip it\x1b[0m\n   \
                  voicepack archive              \x1b[90m# Zip the source tree for sharing\x1b[0m\n   \
                  voicepack clean -y             \x1b[90m# Delete deprecated scripts and build dirs\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "VOICEPACK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision the isolated Python environment
    Setup(SetupArgs),

    /// Install GPU-accelerated inference dependencies and stage CUDA libraries
    Gpu(GpuArgs),

    /// Freeze the application into a distributable bundle
    Build(BuildArgs),

    /// Assemble a filtered source archive for distribution
    Archive(ArchiveArgs),

    /// Remove deprecated scripts and transient build directories
    Clean(CleanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
