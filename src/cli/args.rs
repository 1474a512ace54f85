use clap::{Parser, Subcommand};

use crate::session::Language;

#[derive(Parser, Debug)]
#[command(name = "templo")]
#[command(about = "TEMPLO gym AI assistant with streaming answers")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub chat: ChatArgs,

    /// Suppress status messages and notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for a chat session.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Preferred language: English or Español (en, es)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<Language>,

    /// API endpoint URL [default: https://api.groq.com/openai]
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name [default: llama-3.3-70b-versatile]
    ///
    /// The assistant is tuned for the default model; overriding it is meant
    /// for deployments that serve the same family under another name.
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive assistant (default)
    Chat(ChatArgs),
    /// Show the link to book a class
    Book,
    /// Show the gym schedule
    Schedule,
    /// List selectable languages
    Languages,
}
