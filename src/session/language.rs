//! Assistant languages and their system instructions.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

const ENGLISH_INSTRUCTION: &str = "You are a friendly, motivational assistant for TEMPLO gym in Cochabamba, Bolivia. \n    \
TEMPLO offers integral training: isometric exercises, functional training, impact exercises, resistance bands, weights, gym machines, calisthenics (for all levels), bar work, and premium Power Plate vibration platforms (30-min sessions for toning, weight loss, strength).\n    \
Focus on goals, mindset, and transformation. Respond enthusiastically, use emojis 💪🔥, motivate the user, and subtly promote classes.\n    \
Always answer in English unless asked otherwise.";

const SPANISH_INSTRUCTION: &str = "Eres un asistente amigable y motivador para el gimnasio TEMPLO en Cochabamba, Bolivia. \n    \
TEMPLO ofrece entrenamiento integral: ejercicios isométricos, funcionales, de impacto, con ligas, pesas, máquinas, calistenia (para todos los niveles), barras y servicio premium con plataformas Power Plate (sesiones de 30 min para tonificar, bajar de peso, fuerza).\n    \
Enfócate en objetivos, mente y transformación. Responde entusiasta, usa emojis 💪🔥, motiva al usuario y promociona sutilmente las clases.\n    \
Siempre responde en español a menos que se pida lo contrario.";

/// Language the assistant answers in and the query log is labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    #[serde(rename = "Español")]
    Spanish,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::Spanish];

    /// The literal label shown in the selector and written to exports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
        }
    }

    /// The persona instruction that seeds a transcript in this language.
    pub const fn system_instruction(self) -> &'static str {
        match self {
            Self::English => ENGLISH_INSTRUCTION,
            Self::Spanish => SPANISH_INSTRUCTION,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "español" | "espanol" | "es" => Ok(Self::Spanish),
            _ => anyhow::bail!(
                "Invalid language: '{s}'\n\n\
                 Valid languages: English, Español (or en, es)"
            ),
        }
    }
}

/// Prints the selectable languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Preferred language / Idioma preferido"));
    for language in Language::ALL {
        println!("  {}", Style::value(language));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_labels() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Español".parse::<Language>().unwrap(), Language::Spanish);
    }

    #[test]
    fn test_parse_codes_and_case() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("espanol".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!(" english ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("Invalid language"));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Spanish.to_string(), "Español");
    }

    #[test]
    fn test_instructions_cover_offering() {
        let en = Language::English.system_instruction();
        for needle in [
            "TEMPLO",
            "Cochabamba",
            "isometric",
            "resistance bands",
            "calisthenics",
            "Power Plate",
            "30-min",
            "Always answer in English",
        ] {
            assert!(en.contains(needle), "English instruction missing {needle}");
        }

        let es = Language::Spanish.system_instruction();
        for needle in [
            "TEMPLO",
            "Cochabamba",
            "isométricos",
            "ligas",
            "calistenia",
            "Power Plate",
            "30 min",
            "Siempre responde en español",
        ] {
            assert!(es.contains(needle), "Spanish instruction missing {needle}");
        }
    }

    #[test]
    fn test_instructions_keep_line_layout() {
        for language in Language::ALL {
            let lines: Vec<&str> = language.system_instruction().lines().collect();
            assert_eq!(lines.len(), 4, "{language}");
            assert!(lines[0].ends_with("Bolivia. "), "{language}");
            assert!(lines[1].starts_with("    TEMPLO "), "{language}");
            assert!(lines[3].starts_with("    Si") || lines[3].starts_with("    Al"));
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Language::Spanish).unwrap();
        assert_eq!(json, "\"Español\"");
        let parsed: Language = serde_json::from_str("\"English\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
