use std::path::PathBuf;
use std::process;

use clap::Parser;

mod clipboard;
mod generate;
mod interactive;
mod table;
mod theme;

#[derive(Parser)]
#[command(name = "pwgen", about = "Generate random passwords.")]
enum Args {
    /// Generate a single password and print it.
    Generate {
        /// Number of characters in the password.
        #[arg(long, short, default_value_t = 8)]
        length: usize,
        /// Include the digits 0-9.
        #[arg(long, short)]
        numbers: bool,
        /// Include the special characters !@#$%^&*()_+
        #[arg(long, short)]
        special_chars: bool,
        /// Also copy the password to the clipboard.
        #[arg(long, short)]
        copy: bool,
    },
    /// Open the interactive generator: pick a length and character classes, regenerate, and copy
    /// the result to the clipboard.
    Interactive {
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
    /// Commands for the light/dark display preference.
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(clap::Subcommand)]
enum ThemeCommand {
    /// Print the current theme.
    Show {
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
    /// Switch between light and dark.
    Toggle {
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
    /// Use the dark theme.
    Dark {
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
    /// Use the light theme.
    Light {
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate {
            length,
            numbers,
            special_chars,
            copy,
        } => {
            let config = pwgen::GenerationConfig {
                length,
                include_numbers: numbers,
                include_special_chars: special_chars,
            };
            generate::generate_password(&config, copy)?;
        }
        Args::Interactive { preferences } => interactive::run(preferences)?,
        Args::Theme(ThemeCommand::Show { preferences }) => theme::show_theme(preferences)?,
        Args::Theme(ThemeCommand::Toggle { preferences }) => theme::toggle_theme(preferences)?,
        Args::Theme(ThemeCommand::Dark { preferences }) => {
            theme::set_theme(preferences, pwgen::Theme::Dark)?
        }
        Args::Theme(ThemeCommand::Light { preferences }) => {
            theme::set_theme(preferences, pwgen::Theme::Light)?
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        log::debug!("exiting with {err:?}");
        eprintln!("{err}");
        process::exit(1);
    }
}

fn or_default_preferences(preferences_path: Option<PathBuf>) -> Result<PathBuf, ProgError> {
    match preferences_path {
        Some(p) => Ok(p),
        None => Ok(pwgen::preferences::default_preferences_path()?),
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Pwgen(pwgen::PwgenError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwgen::PwgenError> for ProgError {
    fn from(err: pwgen::PwgenError) -> ProgError {
        ProgError::Pwgen(err)
    }
}
