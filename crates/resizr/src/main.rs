mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "resizr",
    version,
    about = "Find visible windows by process and change their size and position"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List visible windows with their owning process
    List(commands::list::ListArgs),
    /// Show the current size and position of a window
    Size(commands::size::SizeArgs),
    /// Resize and/or move a window
    Resize(commands::resize::ResizeArgs),
    /// Pick a window by process name and resize it step by step
    Prompt,
    /// Toggle between the light and dark theme
    Theme,
    /// Show the saved preferences
    Prefs,
}

fn main() {
    let cli = Cli::parse();
    resizr_core::log::init();

    match cli.command {
        Commands::List(args) => commands::list::execute(&args),
        Commands::Size(args) => commands::size::execute(&args),
        Commands::Resize(args) => commands::resize::execute(&args),
        Commands::Prompt => commands::prompt::execute(),
        Commands::Theme => commands::theme::execute(),
        Commands::Prefs => commands::prefs::execute(),
    }
}
