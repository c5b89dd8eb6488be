//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

static LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
static NUMBERS: &str = "0123456789";
static SPECIAL_CHARS: &str = "!@#$%^&*()_+";

/// Parameters for a single call to [`generate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_special_chars: bool,
}

impl Default for GenerationConfig {
    fn default() -> GenerationConfig {
        GenerationConfig {
            length: 8,
            include_numbers: false,
            include_special_chars: false,
        }
    }
}

/// The characters a password may be drawn from.
///
/// Letters always come first, then digits, then special characters. Nothing is deduplicated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn for_config(config: &GenerationConfig) -> Alphabet {
        let mut abc = Vec::new();
        abc.extend(LETTERS.chars());
        if config.include_numbers {
            abc.extend(NUMBERS.chars());
        }
        if config.include_special_chars {
            abc.extend(SPECIAL_CHARS.chars());
        }
        Alphabet(abc)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }
}

/// Generate a password for `config` by sampling its alphabet `config.length` times.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let alphabet = Alphabet::for_config(config);
    log::debug!(
        "generating a password of length {} from an alphabet of {} characters",
        config.length,
        alphabet.len()
    );
    generate_random_password(rng, alphabet.as_slice(), config.length)
}

/// Generate a password by randomly sampling the given alphabet.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples. An empty alphabet yields an empty password.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        match alphabet.choose(rng) {
            Some(ch) => secret.push(*ch),
            None => break,
        }
    }
    crate::Secret::from(secret)
}
