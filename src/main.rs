// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use finance_tracker::StoreConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.store_config();
    let command = args.command.unwrap_or(Command::Tui);

    // The TUI owns the terminal, so it only logs when given a file
    match (&command, args.log_file.as_deref()) {
        (Command::Tui, None) => {}
        (_, log_file) => cli::init_logging(&args.log_level, log_file)?,
    }

    match command {
        Command::Add {
            date,
            amount,
            category,
            description,
        } => cli::run_add(config, date, amount, category, description),
        Command::Summary { start, end, json } => cli::run_summary(config, start, end, json),
        Command::Tui => run_ui_mode(config),
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: StoreConfig) -> Result<()> {
    let mut app = ui::App::open(config)?;
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: StoreConfig) -> Result<()> {
    anyhow::bail!("TUI mode not available, rebuild with `--features tui` or use the `add` / `summary` commands")
}
