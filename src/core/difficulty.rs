//! Difficulty ladder
//!
//! Six difficulties, each fixing the guess budget for a round.

use std::fmt;

/// Round difficulty, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    Normal,
    Hard,
    Extreme,
    Impossible,
}

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Moderate,
        Self::Normal,
        Self::Hard,
        Self::Extreme,
        Self::Impossible,
    ];

    /// Maximum number of guesses a round at this difficulty allows
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Moderate => 7,
            Self::Normal => 6,
            Self::Hard => 5,
            Self::Extreme => 4,
            Self::Impossible => 3,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Impossible => "Impossible",
        }
    }

    /// Position in the selection menu, 1-6
    #[must_use]
    pub const fn menu_index(self) -> usize {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Normal => 3,
            Self::Hard => 4,
            Self::Extreme => 5,
            Self::Impossible => 6,
        }
    }

    /// Look up a difficulty by menu position (1-6)
    #[must_use]
    pub const fn from_menu_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Easy),
            2 => Some(Self::Moderate),
            3 => Some(Self::Normal),
            4 => Some(Self::Hard),
            5 => Some(Self::Extreme),
            6 => Some(Self::Impossible),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_budgets() {
        assert_eq!(Difficulty::Easy.max_guesses(), 8);
        assert_eq!(Difficulty::Moderate.max_guesses(), 7);
        assert_eq!(Difficulty::Normal.max_guesses(), 6);
        assert_eq!(Difficulty::Hard.max_guesses(), 5);
        assert_eq!(Difficulty::Extreme.max_guesses(), 4);
        assert_eq!(Difficulty::Impossible.max_guesses(), 3);
    }

    #[test]
    fn menu_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                Difficulty::from_menu_index(difficulty.menu_index()),
                Some(difficulty)
            );
        }
    }

    #[test]
    fn menu_index_out_of_range() {
        assert_eq!(Difficulty::from_menu_index(0), None);
        assert_eq!(Difficulty::from_menu_index(7), None);
    }

    #[test]
    fn ordering_follows_menu() {
        assert!(Difficulty::Easy < Difficulty::Impossible);
        assert!(Difficulty::Normal < Difficulty::Hard);
    }

    #[test]
    fn display_name() {
        assert_eq!(format!("{}", Difficulty::Impossible), "Impossible");
    }
}
