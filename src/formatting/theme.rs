use std::collections::HashMap;
use std::sync::RwLock;

use colored::{Color, ColoredString, Colorize};
use lazy_static::lazy_static;

use crate::view::Tone;

/// Maps semantic tones to terminal colors for stdout output.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<Tone, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert(Tone::Default, Color::White);
        colors.insert(Tone::Strong, Color::BrightWhite);
        colors.insert(Tone::Muted, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(Tone::Link, Color::Blue);

        // Badges
        colors.insert(Tone::Primary, Color::Blue);
        colors.insert(Tone::Secondary, Color::TrueColor { r: 108, g: 117, b: 125 });
        colors.insert(Tone::Info, Color::Cyan);
        colors.insert(Tone::Success, Color::Green);
        colors.insert(Tone::Marker, Color::Red);

        // Podium
        colors.insert(Tone::Gold, Color::TrueColor { r: 255, g: 215, b: 0 });
        colors.insert(Tone::Silver, Color::TrueColor { r: 192, g: 192, b: 192 });
        colors.insert(Tone::Bronze, Color::TrueColor { r: 205, g: 127, b: 50 });

        Self { colors }
    }

    pub fn get(&self, tone: Tone) -> Color {
        self.colors.get(&tone).copied().unwrap_or(Color::White)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

pub fn theme_color(tone: Tone) -> Color {
    THEME
        .read()
        .map(|t| t.get(tone))
        .unwrap_or(Color::White)
}

pub trait ThemedColorize {
    fn with_tone(&self, tone: Tone) -> ColoredString;
}

impl ThemedColorize for &str {
    fn with_tone(&self, tone: Tone) -> ColoredString {
        let colored = self.color(theme_color(tone));
        match tone {
            Tone::Strong => colored.bold(),
            Tone::Link => colored.underline(),
            _ => colored,
        }
    }
}

impl ThemedColorize for String {
    fn with_tone(&self, tone: Tone) -> ColoredString {
        self.as_str().with_tone(tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get(Tone::Marker), Color::Red);
        assert_eq!(theme.get(Tone::Primary), Color::Blue);
        assert_eq!(theme.get(Tone::Success), Color::Green);
    }

    #[test]
    fn test_with_tone_keeps_text() {
        let colored = "Avengers".with_tone(Tone::Primary);
        assert!(format!("{}", colored).contains("Avengers"));
    }

    #[test]
    fn test_theme_color_function() {
        assert_eq!(theme_color(Tone::Info), Color::Cyan);
    }
}
