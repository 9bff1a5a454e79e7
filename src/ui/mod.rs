//! User interface styling

pub mod theme;

pub use theme::{CurrentTheme, Palette, ThemeVariant};
