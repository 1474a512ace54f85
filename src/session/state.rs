use chrono::{Local, NaiveDateTime};

use super::{Language, QueryLog, QueryRecord, Transcript};

/// Everything one conversation owns: the transcript, the query log and the
/// language currently selected.
///
/// One instance per interactive session, handed by `&mut` to whatever handles
/// the next user action.
#[derive(Debug, Clone)]
pub struct SessionState {
    language: Language,
    transcript: Transcript,
    queries: QueryLog,
}

impl SessionState {
    /// Starts a session with a transcript seeded in `language` and an empty log.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            transcript: Transcript::seeded(language.system_instruction()),
            queries: QueryLog::new(),
        }
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn queries(&self) -> &QueryLog {
        &self.queries
    }

    /// Switches the current language.
    ///
    /// The seed instruction follows the selection only while the transcript has
    /// no conversation yet. Returns whether the seed was rewritten.
    pub fn select_language(&mut self, language: Language) -> bool {
        self.language = language;
        let reseeded = self.transcript.reseed(language.system_instruction());
        tracing::debug!(%language, reseeded, "Language selected");
        reseeded
    }

    /// Records a user prompt in both the transcript and the query log, stamped now.
    pub fn submit_user_prompt(&mut self, text: &str) -> &Transcript {
        self.submit_user_prompt_at(text, Local::now().naive_local())
    }

    /// Same as [`Self::submit_user_prompt`] with an explicit timestamp.
    pub fn submit_user_prompt_at(&mut self, text: &str, at: NaiveDateTime) -> &Transcript {
        self.transcript.push_user(text);
        self.queries.push(QueryRecord::new(at, self.language, text));
        &self.transcript
    }

    /// Commits the assistant's (possibly partial, possibly empty) reply.
    pub fn append_assistant_reply(&mut self, text: &str) {
        self.transcript.push_assistant(text);
    }

    /// Starts a fresh transcript in the current language. The query log is kept.
    pub fn reset(&mut self) {
        self.transcript = Transcript::seeded(self.language.system_instruction());
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
