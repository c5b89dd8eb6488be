//! State for the interactive generator: the current settings, the password they produced, the copy
//! indicator and the display theme.
//!
//! Any change to the length or to either character class regenerates the password.

use std::ops::RangeInclusive;

use crate::password_generation::{self, GenerationConfig};
use crate::{CopyIndicator, Preferences, Secret, Theme};

/// Lengths the widget offers.
pub const LENGTH_RANGE: RangeInclusive<usize> = 8..=50;

/// Somewhere a password can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

pub struct Widget {
    config: GenerationConfig,
    password: Secret,
    copy_indicator: CopyIndicator,
    theme: Theme,
}

impl Widget {
    pub fn new(theme: Theme) -> Widget {
        Self::with_copy_indicator(theme, CopyIndicator::new())
    }

    pub fn with_copy_indicator(theme: Theme, copy_indicator: CopyIndicator) -> Widget {
        let mut widget = Widget {
            config: GenerationConfig::default(),
            password: Secret::from(String::new()),
            copy_indicator,
            theme,
        };
        widget.regenerate();
        widget
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &Secret {
        &self.password
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the length, clamped to [`LENGTH_RANGE`].
    pub fn set_length(&mut self, length: usize) {
        let length = length.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end());
        if length != self.config.length {
            self.config.length = length;
            self.regenerate();
        }
    }

    pub fn toggle_numbers(&mut self) {
        self.config.include_numbers = !self.config.include_numbers;
        self.regenerate();
    }

    pub fn toggle_special_chars(&mut self) {
        self.config.include_special_chars = !self.config.include_special_chars;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        self.password = password_generation::generate(&self.config, &mut rand::thread_rng());
        self.copy_indicator.reset();
    }

    /// Copy the current password, then show "Copied!" for a little while.
    pub fn copy(&mut self, clipboard: &mut impl Clipboard) -> anyhow::Result<()> {
        clipboard.write_text(self.password.as_str())?;
        self.copy_indicator.mark_copied();
        Ok(())
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copy_indicator.is_copied() {
            "Copied!"
        } else {
            "Copy"
        }
    }

    /// Flip the theme. The returned preferences are what should be persisted.
    pub fn toggle_theme(&mut self) -> Preferences {
        self.theme = self.theme.toggled();
        Preferences::from(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;

    #[derive(Default)]
    struct RecordingClipboard(Vec<String>);

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.0.push(text.to_owned());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("no clipboard here"))
        }
    }

    fn assert_matches_config(widget: &Widget) {
        let alphabet = Alphabet::for_config(widget.config());
        assert_eq!(widget.password().char_len(), widget.config().length);
        assert!(widget.password().as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn starts_with_letters_only() {
        let widget = Widget::new(Theme::Light);
        assert_eq!(*widget.config(), GenerationConfig::default());
        assert_eq!(widget.password().char_len(), 8);
        assert!(widget
            .password()
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphabetic()));
        assert_eq!(widget.copy_label(), "Copy");
    }

    #[test]
    fn length_is_clamped() {
        let mut widget = Widget::new(Theme::Light);
        widget.set_length(3);
        assert_eq!(widget.config().length, 8);
        widget.set_length(500);
        assert_eq!(widget.config().length, 50);
        assert_matches_config(&widget);
        widget.set_length(20);
        assert_eq!(widget.config().length, 20);
        assert_matches_config(&widget);
    }

    #[test]
    fn toggles_regenerate_with_new_alphabet() {
        let mut widget = Widget::new(Theme::Light);
        widget.set_length(50);
        widget.toggle_numbers();
        assert!(widget.config().include_numbers);
        assert_matches_config(&widget);
        widget.toggle_special_chars();
        assert!(widget.config().include_special_chars);
        assert_matches_config(&widget);
        widget.toggle_numbers();
        assert!(!widget.config().include_numbers);
        assert_matches_config(&widget);
    }

    #[test]
    fn copy_writes_current_password() {
        let mut widget = Widget::new(Theme::Light);
        let mut clipboard = RecordingClipboard::default();
        widget.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.0, vec![widget.password().as_str().to_owned()]);
        assert_eq!(widget.copy_label(), "Copied!");
    }

    #[test]
    fn regenerating_clears_copied_label() {
        let mut widget = Widget::new(Theme::Light);
        widget.copy(&mut RecordingClipboard::default()).unwrap();
        widget.toggle_numbers();
        assert_eq!(widget.copy_label(), "Copy");
    }

    #[test]
    fn failed_copy_keeps_label() {
        let mut widget = Widget::new(Theme::Light);
        assert!(widget.copy(&mut BrokenClipboard).is_err());
        assert_eq!(widget.copy_label(), "Copy");
    }

    #[test]
    fn toggle_theme_returns_preferences() {
        let mut widget = Widget::new(Theme::Light);
        assert_eq!(widget.toggle_theme(), Preferences { dark_mode: true });
        assert_eq!(widget.theme(), Theme::Dark);
        assert_eq!(widget.toggle_theme(), Preferences { dark_mode: false });
    }
}
