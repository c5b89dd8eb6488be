use std::io;

pub mod copy_indicator;
pub mod password_generation;
pub mod preferences;
pub mod widget;

pub use copy_indicator::CopyIndicator;
pub use password_generation::{Alphabet, GenerationConfig};
pub use preferences::{Preferences, Theme};
pub use widget::{Clipboard, Widget};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PwgenError(PwgenErrorRepr);

impl From<PwgenErrorRepr> for PwgenError {
    fn from(err: PwgenErrorRepr) -> PwgenError {
        PwgenError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum PwgenErrorRepr {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("failed to parse the preferences file: {0}")]
    PreferencesDecodeFailed(serde_json::Error),
    #[error("failed to serialize the preferences into JSON: {0}")]
    SerializationFailure(serde_json::Error),
    #[error("HOME is not set; cannot find home directory of user")]
    NoHomeDirectory,
}

/// A generated password.
///
/// `Debug` is opaque, so a `Secret` can sit inside logged structs without leaking.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_does_not_leak() {
        let secret = Secret::from("hunter2".to_owned());
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("hunter2"));
    }
}
