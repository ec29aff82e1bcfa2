//! Theme configuration for widget rendering.
//!
//! Themes are a plain lookup table keyed by name: hosts resolve a
//! [`StackTheme`] once and pass its values to their renderer. No dynamic
//! dispatch, no reactive invalidation.

use rustc_hash::FxHashMap;
use stackpose_foundation::Color;

/// Backdrop blur flavor for a card's frosted background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlurTint {
    #[default]
    Default,
    Dark,
    Light,
}

/// Rendering parameters a theme contributes to every card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackTheme {
    pub blur_tint: BlurTint,
    pub header_text_color: Color,
}

impl StackTheme {
    /// The built-in light theme.
    pub fn light() -> Self {
        Self {
            blur_tint: BlurTint::Light,
            header_text_color: Color::from_rgb8(0x66, 0x66, 0x66),
        }
    }

    /// The built-in dark theme.
    pub fn dark() -> Self {
        Self {
            blur_tint: BlurTint::Dark,
            header_text_color: Color::from_rgb8(0xAA, 0xAA, 0xAA),
        }
    }
}

/// Name-keyed theme table, seeded with the built-in `light` and `dark`
/// entries.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, StackTheme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert("light".to_owned(), StackTheme::light());
        themes.insert("dark".to_owned(), StackTheme::dark());
        Self { themes }
    }

    pub fn get(&self, name: &str) -> Option<&StackTheme> {
        self.themes.get(name)
    }

    /// Registers or replaces a theme under `name`.
    pub fn register(&mut self, name: impl Into<String>, theme: StackTheme) {
        self.themes.insert(name.into(), theme);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_are_seeded() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get("light"), Some(&StackTheme::light()));
        assert_eq!(registry.get("dark"), Some(&StackTheme::dark()));
        assert_eq!(registry.get("sepia"), None);
    }

    #[test]
    fn custom_themes_can_replace_builtins() {
        let mut registry = ThemeRegistry::new();
        let loud = StackTheme {
            blur_tint: BlurTint::Default,
            header_text_color: Color::WHITE,
        };
        registry.register("dark", loud);
        assert_eq!(registry.get("dark"), Some(&loud));
    }
}
