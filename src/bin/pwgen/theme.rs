//! The light/dark preference: reading and changing it, and the terminal styles each theme uses.

use std::path::PathBuf;

use console::Style;
use pwgen::{Preferences, Theme};

use crate::{or_default_preferences, ProgError};

pub(crate) struct Palette {
    pub header: Style,
    pub plain: Style,
    pub accent: Style,
    pub muted: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => Palette {
                header: Style::new().black().bold(),
                plain: Style::new(),
                accent: Style::new().color256(166),
                muted: Style::new().color256(244),
            },
            Theme::Dark => Palette {
                header: Style::new().white().bold(),
                plain: Style::new().white(),
                accent: Style::new().color256(208),
                muted: Style::new().color256(240),
            },
        }
    }
}

pub(crate) fn show_theme(preferences_path: Option<PathBuf>) -> Result<(), ProgError> {
    let path = or_default_preferences(preferences_path)?;
    let theme = Theme::from(Preferences::load_or_detect(&path)?);
    println!("{}", theme.name());
    Ok(())
}

pub(crate) fn toggle_theme(preferences_path: Option<PathBuf>) -> Result<(), ProgError> {
    let path = or_default_preferences(preferences_path)?;
    let theme = Theme::from(Preferences::load_or_detect(&path)?).toggled();
    Preferences::from(theme).save(&path)?;
    eprintln!("Switched to the {} theme.", theme.name());
    Ok(())
}

pub(crate) fn set_theme(preferences_path: Option<PathBuf>, theme: Theme) -> Result<(), ProgError> {
    let path = or_default_preferences(preferences_path)?;
    Preferences::from(theme).save(&path)?;
    eprintln!("Using the {} theme.", theme.name());
    Ok(())
}
