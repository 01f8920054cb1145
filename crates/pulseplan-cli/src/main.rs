mod config;
mod generate_cmd;
mod library_cmd;
mod render;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use generate_cmd::GenerateArgs;
use library_cmd::LibraryKind;

#[derive(Parser)]
#[command(
    name = "pulseplan",
    version,
    about = "Deterministic multi-platform social campaign planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a pulseplan config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a campaign plan
    Generate(GenerateArgs),
    /// Write the starter inputs as TOML, ready to edit
    Inputs {
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show which persona an audience description matches
    Persona {
        /// Free-text audience description
        audience: String,
    },
    /// List knowledge-base entries
    Library {
        #[arg(value_enum)]
        kind: LibraryKind,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

/// Execute the `pulseplan init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  output.format = {}", cfg.output.format);
    println!();
    println!("Next: run `pulseplan inputs --output inputs.toml`, edit it, and set inputs.path.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cmd_init(force)?,
        Commands::Generate(args) => generate_cmd::run_generate(&args)?,
        Commands::Inputs { output } => generate_cmd::run_inputs(output.as_deref())?,
        Commands::Persona { audience } => library_cmd::run_persona(&audience)?,
        Commands::Library { kind } => library_cmd::run_library(kind)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pulseplan", &mut std::io::stdout());
        }
    }

    Ok(())
}
