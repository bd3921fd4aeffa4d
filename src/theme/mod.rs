//! Day/night theming.
//!
//! The variant is a pure function of the local hour; the caller picks the
//! matching [`Theme`] palette and renders with it.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// First hour (inclusive) of the light period.
pub const DAY_START_HOUR: u32 = 7;
/// First hour (inclusive) of the dark period.
pub const NIGHT_START_HOUR: u32 = 19;

/// Dark between 19:00 and 06:59 local time.
pub const fn is_dark_hour(hour: u32) -> bool {
    hour < DAY_START_HOUR || hour >= NIGHT_START_HOUR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    pub const fn for_hour(hour: u32) -> Self {
        if is_dark_hour(hour) { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "day",
            Self::Dark => "night",
        }
    }
}

/// User preference: follow the clock or pin a variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn resolve(self, hour: u32) -> ThemeVariant {
        match self {
            Self::Auto => ThemeVariant::for_hour(hour),
            Self::Light => ThemeVariant::Light,
            Self::Dark => ThemeVariant::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub variant: ThemeVariant,
    pub background: Color,
    pub foreground: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub tile_selected_bg: Color,
    pub error: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            background: Color::Rgb(246, 246, 248),
            foreground: Color::Rgb(24, 24, 27),
            dim: Color::Rgb(113, 113, 122),
            border: Color::Rgb(200, 200, 208),
            accent: Color::Rgb(229, 9, 20),
            tile_selected_bg: Color::Rgb(226, 226, 234),
            error: Color::Rgb(185, 28, 28),
        }
    }

    pub const fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            background: Color::Rgb(17, 17, 19),
            foreground: Color::Rgb(228, 228, 231),
            dim: Color::Rgb(113, 113, 122),
            border: Color::Rgb(63, 63, 70),
            accent: Color::Rgb(250, 204, 21),
            tile_selected_bg: Color::Rgb(39, 39, 42),
            error: Color::Rgb(248, 113, 113),
        }
    }

    pub const fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn tile_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.tile_selected_bg)
                .fg(self.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            self.base_style()
        }
    }

    pub fn tile_border_style(&self, selected: bool) -> Style {
        if selected {
            self.accent_style()
        } else {
            self.border_style()
        }
    }
}
