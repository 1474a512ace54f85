//! Chat mode UI components.

use super::command::SLASH_COMMANDS;
use super::session::SessionConfig;
use crate::session::{Language, Message, Role};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(language: Language) {
    println!(
        "{} {} - TEMPLO Gym AI Assistant 💪",
        Style::header("templo"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(
            "Your personal assistant for TEMPLO gym in Cochabamba, Bolivia. Ask about classes, \
             Power Plate, calisthenics, pricing, schedules, benefits, or anything else!"
        )
    );
    println!(
        "{} {}",
        Style::label("Preferred language / Idioma preferido:"),
        Style::value(language)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye! / ¡Hasta pronto! 💪"));
}

pub fn print_config(config: &SessionConfig, language: Language) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("language"),
        Style::value(language)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("api key"),
        Style::secondary(format!("(from {})", config.key_source))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, description) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:width$}")),
            Style::secondary(description)
        );
    }
    println!(
        "  {}",
        Style::hint("/lang takes English or Español; /export takes an optional file path")
    );
    println!();
}

pub fn print_history(conversation: &[Message]) {
    if conversation.is_empty() {
        println!("{}", Style::hint("No messages yet / Aún no hay mensajes."));
        println!();
        return;
    }

    for message in conversation {
        let speaker = match message.role {
            Role::User => "You / Tú",
            Role::Assistant => "TEMPLO",
            Role::System => continue,
        };
        println!("{}", Style::speaker(speaker));
        println!("{}", message.content);
        println!();
    }
}

pub fn print_language_selected(language: Language, reseeded: bool) {
    println!(
        "{} Language set to / Idioma cambiado a {}",
        Style::success("✓"),
        Style::value(language)
    );
    if !reseeded {
        println!(
            "{}",
            Style::hint("Applies to new queries and after /reset / Aplica a nuevas consultas y tras /reset")
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
