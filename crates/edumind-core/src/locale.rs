use serde::{Deserialize, Serialize};

/// Language for user-facing text: weekday labels, goal messages, fallback
/// strings and the prompts sent to the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    /// Short weekday label, Monday-first index (0 = Monday).
    pub fn weekday_short(self, monday_index: u32) -> &'static str {
        const PT: [&str; 7] = ["seg.", "ter.", "qua.", "qui.", "sex.", "sáb.", "dom."];
        const EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let i = (monday_index % 7) as usize;
        match self {
            Locale::PtBr => PT[i],
            Locale::En => EN[i],
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}' (expected pt-BR or en)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn weekday_labels_wrap() {
        assert_eq!(Locale::En.weekday_short(0), "Mon");
        assert_eq!(Locale::PtBr.weekday_short(6), "dom.");
        assert_eq!(Locale::En.weekday_short(7), "Mon");
    }
}
