//! vsh CLI - interactive REPL and script runner for the virtual shell
//!
//! Usage:
//!   vsh -c 'ls -l /home'        # Execute a command string
//!   vsh script.vsh              # Execute a script file, line by line
//!   vsh                         # Interactive REPL

mod repl;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// vsh - shell over an in-memory virtual filesystem
#[derive(Parser, Debug)]
#[command(name = "vsh")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execute the given command string
    #[arg(short = 'c')]
    command: Option<String>,

    /// Script file to execute
    #[arg()]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut shell = vsh::Shell::new();

    if let Some(command) = args.command {
        let result = shell.exec(&command).context("failed to execute command")?;
        print!("{}", result.stdout);
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
        std::process::exit(result.exit_code);
    }

    if let Some(script_path) = args.script {
        let script = std::fs::read_to_string(&script_path)
            .with_context(|| format!("failed to read script: {}", script_path.display()))?;

        let mut exit_code = 0;
        for line in script.lines() {
            let result = shell.exec(line).context("failed to execute script line")?;
            print!("{}", result.stdout);
            if !result.stderr.is_empty() {
                eprint!("{}", result.stderr);
            }
            if !result.is_success() {
                exit_code = result.exit_code;
            }
        }
        std::process::exit(exit_code);
    }

    repl::run(&mut shell)
}
