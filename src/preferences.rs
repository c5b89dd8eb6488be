//! The persisted light/dark display preference.

use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{PwgenError, PwgenErrorRepr};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Preferences {
    pub dark_mode: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl From<Preferences> for Theme {
    fn from(prefs: Preferences) -> Theme {
        if prefs.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl From<Theme> for Preferences {
    fn from(theme: Theme) -> Preferences {
        Preferences {
            dark_mode: theme == Theme::Dark,
        }
    }
}

impl Preferences {
    /// Load the preferences at `path`.
    ///
    /// Returns `None` if nothing has been saved there yet.
    pub fn load(path: &Path) -> Result<Option<Preferences>, PwgenError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no preferences saved at {}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(PwgenErrorRepr::Io(err).into()),
        };
        let prefs: Preferences = serde_json::from_reader(io::BufReader::new(file))
            .map_err(PwgenErrorRepr::PreferencesDecodeFailed)?;
        log::debug!("loaded {:?} from {}", prefs, path.display());
        Ok(Some(prefs))
    }

    /// The saved preferences, or whatever the terminal suggests if none were saved.
    pub fn load_or_detect(path: &Path) -> Result<Preferences, PwgenError> {
        match Self::load(path)? {
            Some(prefs) => Ok(prefs),
            None => Ok(Preferences {
                dark_mode: terminal_prefers_dark(env::var("COLORFGBG").ok().as_deref()),
            }),
        }
    }

    /// Write the preferences to `path`, replacing whatever was there.
    pub fn save(&self, path: &Path) -> Result<(), PwgenError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(PwgenErrorRepr::Io)?;
            }
        }
        let temp_path = {
            let mut file_name = path.as_os_str().to_os_string();
            file_name.push(".writing");
            PathBuf::from(file_name)
        };

        let data = serde_json::to_vec(self).map_err(PwgenErrorRepr::SerializationFailure)?;
        let mut file = File::create(&temp_path).map_err(PwgenErrorRepr::Io)?;
        file.write_all(&data)
            .and_then(|()| file.sync_all())
            .map_err(PwgenErrorRepr::Io)?;
        drop(file);
        fs::rename(&temp_path, path).map_err(PwgenErrorRepr::Io)?;
        log::debug!("saved {:?} to {}", self, path.display());
        Ok(())
    }
}

pub fn default_preferences_path() -> Result<PathBuf, PwgenError> {
    let home = env::var_os("HOME").ok_or(PwgenErrorRepr::NoHomeDirectory)?;
    let mut p = PathBuf::from(home);
    p.push(".pwgen");
    p.push("preferences.json");
    Ok(p)
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Backgrounds 0-6 and 8 are the dark entries of the 16-colour palette.
fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    let bg = match colorfgbg.and_then(|v| v.rsplit(';').next()) {
        Some(bg) => bg,
        None => return false,
    };
    matches!(bg.trim().parse::<u8>(), Ok(0..=6) | Ok(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_none() {
        let temp = tempdir().unwrap();
        let loaded = Preferences::load(&temp.path().join("preferences.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("preferences.json");
        Preferences { dark_mode: true }.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded, Some(Preferences { dark_mode: true }));
        assert!(!temp.path().join("nested").join("preferences.json.writing").exists());
    }

    #[test]
    fn save_overwrites() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.json");
        Preferences { dark_mode: true }.save(&path).unwrap();
        Preferences { dark_mode: false }.save(&path).unwrap();
        assert_eq!(
            Preferences::load(&path).unwrap(),
            Some(Preferences { dark_mode: false })
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Preferences::load(&path).is_err());
    }

    #[test]
    fn saved_value_wins_over_detection() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.json");
        std::fs::write(&path, r#"{"dark_mode": false}"#).unwrap();
        assert!(!Preferences::load_or_detect(&path).unwrap().dark_mode);
    }

    #[test]
    fn colorfgbg_detection() {
        assert!(terminal_prefers_dark(Some("15;0")));
        assert!(terminal_prefers_dark(Some("15;default;8")));
        assert!(!terminal_prefers_dark(Some("0;15")));
        assert!(!terminal_prefers_dark(Some("0;7")));
        assert!(!terminal_prefers_dark(Some("garbage")));
        assert!(!terminal_prefers_dark(None));
    }

    #[test]
    fn theme_round_trips_through_preferences() {
        assert_eq!(Theme::from(Preferences::from(Theme::Dark)), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
