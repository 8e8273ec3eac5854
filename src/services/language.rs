//! Display language and its string catalogue

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Languages the screens can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    #[default]
    En,
    It,
}

impl Language {
    /// Heading shown above the countdown
    pub fn countdown_heading(self) -> &'static str {
        match self {
            Language::Pt => "Seu ovo ficará pronto em...",
            Language::En => "Your egg will be ready in...",
            Language::It => "Il tuo uovo sarà pronto in...",
        }
    }

    /// Label of the back action on the countdown screen
    pub fn back_label(self) -> &'static str {
        match self {
            Language::Pt => "Voltar",
            Language::En => "Back",
            Language::It => "Indietro",
        }
    }

    /// Heading shown on the finish screen
    pub fn finish_heading(self) -> &'static str {
        match self {
            Language::Pt => "Seu ovo\nestá pronto!",
            Language::En => "Your egg\nis done!",
            Language::It => "Il tuo uovo\nè pronto!",
        }
    }

    /// Label of the close action on the finish screen
    pub fn close_label(self) -> &'static str {
        match self {
            Language::Pt => "Fechar!",
            Language::En => "Close!",
            Language::It => "Chiudere!",
        }
    }

    pub fn preparation_heading(self) -> &'static str {
        match self {
            Language::Pt => "O que você\n vai fazer hoje?",
            Language::En => "What are you\n making today?",
            Language::It => "Cosa stai\n preparando oggi?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().back_label(), "Back");
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let parsed: Language = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(parsed.close_label(), "Chiudere!");
    }
}
