//! Supported locales and the news outlets whose style each locale may emulate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
    Fr,
    De,
}

impl Locale {
    /// Every supported locale, in catalog order.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Fr, Locale::De];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// English display name, as used inside prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
            Locale::De => "German",
        }
    }

    pub fn outlets(&self) -> &'static [&'static str] {
        match self {
            Locale::En => OUTLETS_EN,
            Locale::Es => OUTLETS_ES,
            Locale::Fr => OUTLETS_FR,
            Locale::De => OUTLETS_DE,
        }
    }

    /// All supported locales except `self`.
    pub fn others(&self) -> impl Iterator<Item = Locale> + '_ {
        Locale::ALL.into_iter().filter(move |l| l != self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            "de" => Ok(Locale::De),
            other => Err(Error::UnsupportedLocale(other.to_string())),
        }
    }
}

const OUTLETS_EN: &[&str] = &[
    "The New York Times (NYT)",
    "The Washington Post",
    "The Guardian",
    "The Wall Street Journal",
    "USA Today",
    "Financial Times",
    "The Economist",
    "Bloomberg",
    "Reuters",
    "Associated Press",
    "CNN",
    "BBC News",
    "Fox News",
    "MSNBC",
    "NPR",
];

const OUTLETS_ES: &[&str] = &[
    "El País",
    "El Mundo",
    "La Vanguardia",
    "ABC",
    "El Confidencial",
    "La Razón",
    "El Español",
    "Público",
    "20 Minutos",
    "EFE",
    "Europa Press",
    "RTVE",
];

const OUTLETS_FR: &[&str] = &[
    "Le Monde",
    "Le Figaro",
    "Libération",
    "L'Express",
    "Les Echos",
    "Le Parisien",
    "La Croix",
    "Marianne",
    "France 24",
    "Agence France-Presse (AFP)",
    "BFMTV",
];

const OUTLETS_DE: &[&str] = &[
    "Bild",
    "Die Welt",
    "Frankfurter Allgemeine Zeitung",
    "Süddeutsche Zeitung",
    "Der Spiegel",
    "Die Zeit",
    "Handelsblatt",
    "Focus",
    "Tagesschau",
    "Deutsche Welle",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_outlets() {
        for locale in Locale::ALL {
            assert!(!locale.outlets().is_empty(), "no outlets for {}", locale);
        }
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" DE ".parse::<Locale>().unwrap(), Locale::De);
        let err = "it".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: it");
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = Locale::Fr.others().collect();
        assert_eq!(others, vec![Locale::En, Locale::Es, Locale::De]);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        let locale: Locale = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(locale, Locale::Fr);
    }
}
