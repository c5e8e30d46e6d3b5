//! Direction - Which way text is translated

use super::language::Language;

/// Translation direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sinhala input, English output
    #[default]
    SinhalaToEnglish,
    /// English input, Sinhala output
    EnglishToSinhala,
}

impl Direction {
    /// Language of the input pane
    pub fn source(self) -> Language {
        match self {
            Direction::SinhalaToEnglish => Language::Sinhala,
            Direction::EnglishToSinhala => Language::English,
        }
    }

    /// Language of the output pane
    pub fn target(self) -> Language {
        match self {
            Direction::SinhalaToEnglish => Language::English,
            Direction::EnglishToSinhala => Language::Sinhala,
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::SinhalaToEnglish => Direction::EnglishToSinhala,
            Direction::EnglishToSinhala => Direction::SinhalaToEnglish,
        }
    }

    /// Label shown above the input pane
    pub fn input_label(self) -> String {
        format!("{} Text:", self.source().display_name())
    }

    /// Label shown above the output pane
    pub fn output_label(self) -> String {
        format!("{} Translation:", self.target().display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sinhala_to_english() {
        let direction = Direction::default();
        assert_eq!(direction.source(), Language::Sinhala);
        assert_eq!(direction.target(), Language::English);
    }

    #[test]
    fn toggle_is_an_involution() {
        for direction in [Direction::SinhalaToEnglish, Direction::EnglishToSinhala] {
            assert_ne!(direction.toggled(), direction);
            assert_eq!(direction.toggled().toggled(), direction);
        }
    }

    #[test]
    fn toggled_swaps_source_and_target() {
        let direction = Direction::SinhalaToEnglish.toggled();
        assert_eq!(direction.source(), Language::English);
        assert_eq!(direction.target(), Language::Sinhala);
    }

    #[test]
    fn labels_follow_direction() {
        assert_eq!(Direction::SinhalaToEnglish.input_label(), "Sinhala Text:");
        assert_eq!(Direction::SinhalaToEnglish.output_label(), "English Translation:");
        assert_eq!(Direction::EnglishToSinhala.input_label(), "English Text:");
        assert_eq!(Direction::EnglishToSinhala.output_label(), "Sinhala Translation:");
    }
}
