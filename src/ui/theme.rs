//! Color themes
//!
//! Two built-in palettes. The active one is stored in `CurrentTheme` and read
//! when the widget is spawned.

use bevy::prelude::*;

/// Available theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["dark", "light"]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::srgb(0.08, 0.08, 0.09),
                text: Color::srgb(0.92, 0.92, 0.90),
                placeholder: Color::srgba(0.92, 0.92, 0.90, 0.25),
                caret: Color::srgb(1.0, 0.5, 0.0),
            },
            Self::Light => Palette {
                background: Color::srgb(0.98, 0.97, 0.94),
                text: Color::srgb(0.10, 0.10, 0.12),
                placeholder: Color::srgba(0.10, 0.10, 0.12, 0.25),
                caret: Color::srgb(0.85, 0.30, 0.0),
            },
        }
    }
}

/// Colors used by the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub placeholder: Color,
    pub caret: Color,
}

/// Resource holding the active theme
#[derive(Resource, Debug, Clone, Copy)]
pub struct CurrentTheme {
    pub variant: ThemeVariant,
    pub palette: Palette,
}

impl CurrentTheme {
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            palette: variant.palette(),
        }
    }
}

impl Default for CurrentTheme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
