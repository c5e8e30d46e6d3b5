//! Language - The two languages the translator works between

/// A language the translator can read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Sinhala,
    English,
}

impl Language {
    /// ISO 639-1 code passed to the model
    pub fn code(self) -> &'static str {
        match self {
            Language::Sinhala => "si",
            Language::English => "en",
        }
    }

    /// Human readable name used in pane labels
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Sinhala => "Sinhala",
            Language::English => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_model_tags() {
        assert_eq!(Language::Sinhala.code(), "si");
        assert_eq!(Language::English.code(), "en");
    }
}
