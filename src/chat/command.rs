use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/book", "Book a class / Reservar una clase"),
    ("/config", "Show current configuration"),
    ("/export", "Download collected queries as CSV"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/lang", "Choose language / Elegir idioma"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Start a new conversation"),
    ("/schedule", "View schedule / Ver horarios"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Book,
    Config,
    /// Optional output path.
    Export(Option<String>),
    Help,
    History,
    /// Optional language name; `None` opens the picker.
    Lang(Option<String>),
    Quit,
    Reset,
    Schedule,
    Unknown(String),
}

#[derive(Debug)]
pub enum Input {
    Prompt(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Prompt(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "book" => SlashCommand::Book,
        "config" => SlashCommand::Config,
        "export" => SlashCommand::Export(argument),
        "help" => SlashCommand::Help,
        "history" => SlashCommand::History,
        "lang" | "language" | "idioma" => SlashCommand::Lang(argument),
        "quit" | "exit" | "q" => SlashCommand::Quit,
        "reset" => SlashCommand::Reset,
        "schedule" | "horarios" => SlashCommand::Schedule,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };
    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn command(input: &str) -> SlashCommand {
        match parse_input(input) {
            Input::Command(cmd) => cmd,
            other => panic!("Expected Input::Command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_prompt_is_trimmed() {
        match parse_input("  When is Power Plate available?  ") {
            Input::Prompt(text) => assert_eq!(text, "When is Power Plate available?"),
            other => panic!("Expected Input::Prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(command("/book"), SlashCommand::Book);
        assert_eq!(command("/config"), SlashCommand::Config);
        assert_eq!(command("/help"), SlashCommand::Help);
        assert_eq!(command("/history"), SlashCommand::History);
        assert_eq!(command("/reset"), SlashCommand::Reset);
        assert_eq!(command("/schedule"), SlashCommand::Schedule);
        assert_eq!(command("/horarios"), SlashCommand::Schedule);
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(command("/quit"), SlashCommand::Quit);
        assert_eq!(command("/exit"), SlashCommand::Quit);
        assert_eq!(command("/q"), SlashCommand::Quit);
    }

    #[test]
    fn test_parse_lang_with_and_without_argument() {
        assert_eq!(command("/lang"), SlashCommand::Lang(None));
        assert_eq!(
            command("/lang   Español "),
            SlashCommand::Lang(Some("Español".to_string()))
        );
        assert_eq!(
            command("/idioma es"),
            SlashCommand::Lang(Some("es".to_string()))
        );
    }

    #[test]
    fn test_parse_export_path() {
        assert_eq!(command("/export"), SlashCommand::Export(None));
        assert_eq!(
            command("/export /tmp/my queries.csv"),
            SlashCommand::Export(Some("/tmp/my queries.csv".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            command("/dance  now"),
            SlashCommand::Unknown("dance now".to_string())
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggests_all_commands_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/e").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/export"));

        let suggestions = completer.get_suggestions("/h").unwrap();
        assert_eq!(suggestions.len(), 2); // /help, /history
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/schedule  View schedule / Ver horarios".to_string();
        let completion = completer.get_completion("/s", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/schedule".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
