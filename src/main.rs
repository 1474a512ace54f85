use anyhow::Result;
use clap::Parser;

use templo_cli::cli::commands::chat;
use templo_cli::cli::{Args, Command};
use templo_cli::config::MissingApiKey;
use templo_cli::gym;
use templo_cli::output::{self, OutputConfig};
use templo_cli::session::print_languages;
use templo_cli::ui::Style;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
        verbose: args.verbose,
    });

    let result = match args.command {
        Some(Command::Book) => {
            gym::print_booking();
            Ok(())
        }
        Some(Command::Schedule) => {
            gym::print_schedule();
            Ok(())
        }
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Chat(chat_args)) => chat::run_chat(chat_args).await,
        None => chat::run_chat(args.chat).await,
    };

    if let Err(e) = result {
        if let Some(missing) = e.downcast_ref::<MissingApiKey>() {
            eprintln!("{} {missing}", Style::error("Error:"));
            eprintln!();
            eprintln!("{}", missing.remediation());
            std::process::exit(exitcode::CONFIG);
        }
        return Err(e);
    }

    Ok(())
}
