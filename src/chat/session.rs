use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::completion::{CompletionClient, Reply, run_turn};
use crate::config::{KeySource, ResolvedConfig};
use crate::export::export_queries;
use crate::session::{Language, SessionState};
use crate::ui::{Spinner, Style, prompt_or_cancel};
use crate::{fs, gym, notice, output, status};

const PROMPT_HELP: &str = "Ask about TEMPLO gym (schedules, Power Plate, calisthenics, pricing, etc.) / \
     Pregunta sobre TEMPLO (horarios, Power Plate, calistenia, precios, etc.)";

/// Connection settings shown by `/config`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub endpoint: String,
    pub model: String,
    pub key_source: KeySource,
}

/// An interactive chat session.
///
/// Owns the conversation state for as long as the REPL runs; nothing outlives it.
pub struct ChatSession {
    config: SessionConfig,
    client: CompletionClient,
    state: SessionState,
}

impl ChatSession {
    pub fn new(resolved: ResolvedConfig) -> Self {
        let client = CompletionClient::new(
            resolved.endpoint.clone(),
            resolved.model.clone(),
            resolved.api_key.expose().to_string(),
        );
        let config = SessionConfig {
            endpoint: resolved.endpoint,
            model: resolved.model,
            key_source: resolved.api_key.source(),
        };
        Self {
            config,
            client,
            state: SessionState::new(resolved.language),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.state.language());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(PROMPT_HELP)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Prompt(text) => {
                        self.respond(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Book => gym::print_booking(),
            SlashCommand::Config => ui::print_config(&self.config, self.state.language()),
            SlashCommand::Export(path) => self.export(path.as_deref()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(self.state.transcript().conversation()),
            SlashCommand::Lang(name) => self.set_language(name.as_deref())?,
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Reset => {
                self.state.reset();
                println!(
                    "{} New conversation started / Nueva conversación iniciada\n",
                    Style::success("✓")
                );
            }
            SlashCommand::Schedule => gym::print_schedule(),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd} (try /help)"));
            }
        }
        Ok(true)
    }

    fn set_language(&mut self, name: Option<&str>) -> Result<()> {
        let language = match name {
            Some(name) => match name.parse::<Language>() {
                Ok(language) => language,
                Err(e) => {
                    ui::print_error(&e.to_string());
                    return Ok(());
                }
            },
            None => {
                let current = self.state.language();
                let picked = prompt_or_cancel(|| {
                    Select::new(
                        "Preferred language / Idioma preferido:",
                        Language::ALL.to_vec(),
                    )
                    .with_starting_cursor(usize::from(current == Language::Spanish))
                    .prompt()
                })?;
                let Some(language) = picked else {
                    return Ok(());
                };
                language
            }
        };

        let reseeded = self.state.select_language(language);
        ui::print_language_selected(language, reseeded);
        Ok(())
    }

    fn export(&self, path: Option<&str>) {
        let Some(export) = export_queries(self.state.queries()) else {
            notice!(
                "{} No queries yet / Aún no hay consultas.\n",
                Style::warning("!")
            );
            return;
        };

        let path = PathBuf::from(path.unwrap_or(export.file_name));
        let records = self.state.queries().len();
        match fs::atomic_write(&path, &export.bytes) {
            Ok(()) => {
                tracing::info!(path = %path.display(), records, "Queries exported");
                status!(
                    "{} Exported {} queries to {} ({})\n",
                    Style::success("✓"),
                    records,
                    Style::value(path.display()),
                    export.mime
                );
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    async fn respond(&mut self, prompt: &str) {
        let spinner = Spinner::new("Thinking... / Pensando...");
        let mut streaming = false;

        let reply = run_turn(&mut self.state, &self.client, prompt, |progress| {
            if !streaming {
                spinner.stop();
                println!("{}", Style::speaker("TEMPLO"));
                streaming = true;
            }
            print!("{}", progress.fragment);
            output::flush_stdout();
        })
        .await;

        spinner.stop();
        if streaming {
            println!();
        }
        println!();

        if let Reply::Interrupted { error, .. } = &reply {
            ui::print_error(&format!(
                "Error connecting to Groq / Error al conectar con Groq: {error}"
            ));
        }
    }
}
