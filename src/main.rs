use clap::{Parser, Subcommand};
use replay_navigator::commands::*;
use replay_navigator::core::{error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "replay-navigator")]
#[command(about = "A clean and fast World of Tanks replay manager")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List replays with decoded metadata
    List(ListArgs),
    /// Launch a replay by its catalog index
    Launch(LaunchArgs),
    /// Delete replays older than the installed client version
    Cleanup(CleanupArgs),
    /// Show or change settings
    Settings(SettingsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::List(args) => {
            if let Err(e) = execute_list(&args) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Launch(args) => {
            if let Err(e) = execute_launch(&args) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Cleanup(args) => {
            if let Err(e) = execute_cleanup(&args) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Settings(args) => {
            if let Err(e) = execute_settings(&args) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
