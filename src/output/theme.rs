//! Title themes
//!
//! Each theme is a color cycle plus an animation speed, applied to the
//! banner and the theme menu. Colors are truecolor equivalents of the
//! 256-color palette the game has always used.

use colored::Color;
use std::time::Duration;

const RED: Color = Color::TrueColor { r: 255, g: 0, b: 0 };
const LIGHT_RED: Color = Color::TrueColor {
    r: 255,
    g: 95,
    b: 95,
};
const YELLOW: Color = Color::TrueColor {
    r: 255,
    g: 215,
    b: 0,
};
const LIGHT_YELLOW: Color = Color::TrueColor {
    r: 255,
    g: 255,
    b: 95,
};
const GREEN: Color = Color::TrueColor { r: 0, g: 255, b: 0 };
const LIGHT_GREEN: Color = Color::TrueColor {
    r: 95,
    g: 255,
    b: 0,
};
const CYAN: Color = Color::TrueColor {
    r: 0,
    g: 255,
    b: 255,
};
const LIGHT_CYAN: Color = Color::TrueColor {
    r: 95,
    g: 255,
    b: 255,
};
const BLUE: Color = Color::TrueColor { r: 0, g: 0, b: 255 };
const LIGHT_BLUE: Color = Color::TrueColor {
    r: 95,
    g: 175,
    b: 255,
};
const MAGENTA: Color = Color::TrueColor {
    r: 255,
    g: 0,
    b: 255,
};
const LIGHT_MAGENTA: Color = Color::TrueColor {
    r: 255,
    g: 135,
    b: 255,
};
const DARK_GRAY: Color = Color::TrueColor {
    r: 48,
    g: 48,
    b: 48,
};
const GRAY: Color = Color::TrueColor {
    r: 138,
    g: 138,
    b: 138,
};
const WHITE: Color = Color::TrueColor {
    r: 238,
    g: 238,
    b: 238,
};

/// A banner color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Normal,
    Rainbow,
    PastelRainbow,
    Fire,
    Ice,
    Matrix,
    Synth,
    Grayscale,
    Sunset,
    Ocean,
}

impl Theme {
    /// All themes in menu order
    pub const ALL: [Self; 10] = [
        Self::Normal,
        Self::Rainbow,
        Self::PastelRainbow,
        Self::Fire,
        Self::Ice,
        Self::Matrix,
        Self::Synth,
        Self::Grayscale,
        Self::Sunset,
        Self::Ocean,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Rainbow => "Rainbow",
            Self::PastelRainbow => "Pastel Rainbow",
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Matrix => "Matrix",
            Self::Synth => "Synth",
            Self::Grayscale => "Grayscale",
            Self::Sunset => "Sunset",
            Self::Ocean => "Ocean",
        }
    }

    /// The theme's color cycle
    #[must_use]
    pub const fn colors(self) -> &'static [Color] {
        match self {
            Self::Normal => &[WHITE],
            Self::Rainbow => &[RED, YELLOW, GREEN, CYAN, BLUE, MAGENTA, LIGHT_RED],
            Self::PastelRainbow => &[
                LIGHT_RED,
                LIGHT_YELLOW,
                LIGHT_GREEN,
                LIGHT_CYAN,
                LIGHT_BLUE,
                LIGHT_MAGENTA,
            ],
            Self::Fire => &[DARK_GRAY, RED, LIGHT_RED, YELLOW, LIGHT_YELLOW, WHITE],
            Self::Ice => &[DARK_GRAY, BLUE, CYAN, LIGHT_CYAN, LIGHT_BLUE, WHITE],
            Self::Matrix => &[DARK_GRAY, GREEN, LIGHT_GREEN, WHITE, LIGHT_GREEN, GREEN],
            Self::Synth => &[
                MAGENTA,
                LIGHT_MAGENTA,
                LIGHT_BLUE,
                CYAN,
                LIGHT_CYAN,
                WHITE,
            ],
            Self::Grayscale => &[DARK_GRAY, GRAY, WHITE],
            Self::Sunset => &[
                LIGHT_MAGENTA,
                MAGENTA,
                RED,
                LIGHT_RED,
                YELLOW,
                LIGHT_YELLOW,
            ],
            Self::Ocean => &[GRAY, BLUE, LIGHT_BLUE, CYAN, LIGHT_CYAN, WHITE],
        }
    }

    /// Delay between banner animation frames
    #[must_use]
    pub const fn frame_delay(self) -> Duration {
        let millis = match self {
            Self::Normal => 80,
            Self::Rainbow | Self::Synth => 90,
            Self::PastelRainbow | Self::Matrix => 50,
            Self::Fire => 60,
            Self::Ice => 140,
            Self::Grayscale => 180,
            Self::Sunset => 100,
            Self::Ocean => 130,
        };
        Duration::from_millis(millis)
    }

    /// Position in the selection menu, 1-10
    #[must_use]
    pub fn menu_index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0) + 1
    }

    /// Look up a theme by menu position (1-10)
    #[must_use]
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parse a theme name, case-insensitive, spaces/underscores/hyphens
    /// interchangeable
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        Self::ALL.into_iter().find(|theme| {
            theme
                .name()
                .chars()
                .filter(|c| *c != ' ')
                .collect::<String>()
                .to_lowercase()
                == normalized
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_menu_index(theme.menu_index()), Some(theme));
        }
    }

    #[test]
    fn menu_index_out_of_range() {
        assert_eq!(Theme::from_menu_index(0), None);
        assert_eq!(Theme::from_menu_index(11), None);
    }

    #[test]
    fn every_theme_has_colors() {
        for theme in Theme::ALL {
            assert!(!theme.colors().is_empty());
        }
    }

    #[test]
    fn from_name_variants() {
        assert_eq!(Theme::from_name("fire"), Some(Theme::Fire));
        assert_eq!(Theme::from_name("FIRE"), Some(Theme::Fire));
        assert_eq!(
            Theme::from_name("pastel_rainbow"),
            Some(Theme::PastelRainbow)
        );
        assert_eq!(
            Theme::from_name("pastel-rainbow"),
            Some(Theme::PastelRainbow)
        );
        assert_eq!(Theme::from_name("lava"), None);
    }
}
