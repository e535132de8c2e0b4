//! Voicepack - build and release pipeline for the Voice Tools desktop app
//!
//! One binary replaces the pile of batch scripts that used to drive the
//! release process: provisioning the isolated Python environment, swapping
//! in GPU-accelerated inference dependencies, freezing the desktop app into
//! a distributable bundle, and assembling filtered source archives. Each
//! subcommand is one pipeline stage; the operator runs them in order.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod freeze;
mod gpu;
mod progress;
mod python;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.project, args),
        Commands::Gpu(args) => commands::gpu::run(cli.project, args),
        Commands::Build(args) => commands::build::run(cli.project, cli.verbose, args),
        Commands::Archive(args) => commands::archive::run(cli.project, cli.verbose, args),
        Commands::Clean(args) => commands::clean::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
