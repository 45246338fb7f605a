//! Color theme for the TUI.
//!
//! Dark and light variants share one semantic palette based on Tailwind CSS
//! slate/blue colors.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Theme variant (dark or light).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub info: Color,

    // Pagination controls
    pub page: Style,
    pub current_page: Style,
    pub ellipsis: Style,
    pub nav: Style,
    pub nav_disabled: Style,
    pub caption: Style,
    pub empty: Style,

    // Result list
    pub item: Style,
    pub item_index: Style,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);

        let blue_400 = Color::Rgb(96, 165, 250);
        let stone_600 = Color::Rgb(107, 97, 79);
        let amber_500 = Color::Rgb(245, 158, 11);

        Self {
            variant: ThemeVariant::Dark,
            info: blue_400,

            page: Style::new().fg(slate_300).bg(slate_800),
            current_page: Style::new().fg(slate_50).bg(stone_600).add_modifier(Modifier::BOLD),
            ellipsis: Style::new().fg(slate_500),
            nav: Style::new().fg(blue_400).bg(slate_800),
            nav_disabled: Style::new().fg(slate_700).bg(slate_800),
            caption: Style::new().fg(slate_400),
            empty: Style::new().fg(amber_500).add_modifier(Modifier::ITALIC),

            item: Style::new().fg(slate_300),
            item_index: Style::new().fg(slate_500),

            border: Style::new().fg(slate_600),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),

            header: Style::new().bg(slate_800).fg(slate_100),
            footer: Style::new().bg(slate_800).fg(slate_400),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);

        let blue_700 = Color::Rgb(29, 78, 216);
        let stone_700 = Color::Rgb(90, 81, 66);
        let amber_600 = Color::Rgb(217, 119, 6);

        Self {
            variant: ThemeVariant::Light,
            info: blue_700,

            page: Style::new().fg(slate_700).bg(slate_200),
            current_page: Style::new().fg(slate_50).bg(stone_700).add_modifier(Modifier::BOLD),
            ellipsis: Style::new().fg(slate_500),
            nav: Style::new().fg(blue_700).bg(slate_200),
            nav_disabled: Style::new().fg(slate_300).bg(slate_200),
            caption: Style::new().fg(slate_600),
            empty: Style::new().fg(amber_600).add_modifier(Modifier::ITALIC),

            item: Style::new().fg(slate_700),
            item_index: Style::new().fg(slate_400),

            border: Style::new().fg(slate_400),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),

            header: Style::new().bg(slate_100).fg(slate_800),
            footer: Style::new().bg(slate_100).fg(slate_600),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_variant_parsing() {
        assert_eq!(ThemeVariant::from_str("dark").unwrap(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::from_str("Light").unwrap(), ThemeVariant::Light);
        assert!(ThemeVariant::from_str("neon").is_err());
        assert_eq!(ThemeVariant::Light.to_string(), "light");
    }

    #[test]
    fn test_toggle_round_trip() {
        for variant in ThemeVariant::iter() {
            let theme = Theme::from_variant(variant);
            assert_eq!(theme.variant, variant);
            assert_eq!(theme.toggle().toggle().variant, variant);
            assert_ne!(theme.toggle().variant, variant);
        }
    }
}
