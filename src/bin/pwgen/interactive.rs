//! The interactive generator: a card showing the current password and settings, with a menu to
//! change the settings, copy the password, or switch theme.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use console::Term;
use pwgen::widget::LENGTH_RANGE;
use pwgen::{Preferences, Theme, Widget};

use crate::clipboard::SystemClipboard;
use crate::table::{display_table, TableDisplay};
use crate::theme::Palette;
use crate::{or_default_preferences, ProgError};

enum Action {
    Copy,
    Regenerate,
    SetLength,
    ToggleNumbers,
    ToggleSpecialChars,
    ToggleTheme,
    Quit,
}

static ACTIONS: &[Action] = &[
    Action::Copy,
    Action::Regenerate,
    Action::SetLength,
    Action::ToggleNumbers,
    Action::ToggleSpecialChars,
    Action::ToggleTheme,
    Action::Quit,
];

pub(crate) fn run(preferences_path: Option<PathBuf>) -> Result<(), ProgError> {
    let preferences_path = or_default_preferences(preferences_path)?;
    let theme = Theme::from(Preferences::load_or_detect(&preferences_path)?);
    let mut widget = Widget::new(theme);
    let mut clipboard = SystemClipboard;
    let term = Term::stderr();
    let mut selection = 0;

    loop {
        term.clear_screen()
            .context("failed to clear the terminal")?;
        render(&widget, &term).context("failed to draw the generator")?;

        let items = ACTIONS
            .iter()
            .map(|action| menu_label(&widget, action))
            .collect::<Vec<_>>();
        selection = match dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
            .items(&items)
            .default(selection)
            .interact_on_opt(&term)
            .context("failed to query your selection")?
        {
            Some(s) => s,
            None => return Ok(()),
        };

        match ACTIONS[selection] {
            Action::Copy => {
                if let Err(err) = widget.copy(&mut clipboard) {
                    log::warn!("clipboard write failed: {err:#}");
                    eprintln!("Failed to copy to the clipboard: {err:#}");
                    wait_for_key(&term)?;
                }
            }
            Action::Regenerate => widget.regenerate(),
            Action::SetLength => {
                let length = prompt_length(&term, widget.config().length)?;
                widget.set_length(length);
            }
            Action::ToggleNumbers => widget.toggle_numbers(),
            Action::ToggleSpecialChars => widget.toggle_special_chars(),
            Action::ToggleTheme => {
                let preferences = widget.toggle_theme();
                if let Err(err) = preferences.save(&preferences_path) {
                    log::warn!("failed to save preferences: {err}");
                    eprintln!("The theme was changed, but could not be saved: {err}");
                    wait_for_key(&term)?;
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn menu_label(widget: &Widget, action: &Action) -> String {
    let config = widget.config();
    match action {
        Action::Copy => widget.copy_label().to_owned(),
        Action::Regenerate => "Regenerate".to_owned(),
        Action::SetLength => format!("Length: {}", config.length),
        Action::ToggleNumbers => format!("[{}] Include Numbers", check(config.include_numbers)),
        Action::ToggleSpecialChars => {
            format!("[{}] Include Characters", check(config.include_special_chars))
        }
        Action::ToggleTheme => match widget.theme() {
            Theme::Light => "Switch to dark mode".to_owned(),
            Theme::Dark => "Switch to light mode".to_owned(),
        },
        Action::Quit => "Quit".to_owned(),
    }
}

fn yes_no(b: bool) -> String {
    let s = if b { "yes" } else { "no" };
    s.to_owned()
}

fn check(b: bool) -> char {
    if b {
        'x'
    } else {
        ' '
    }
}

struct CardRow {
    label: &'static str,
    value: String,
    emphasized: bool,
}

impl TableDisplay for CardRow {
    fn columns() -> usize {
        2
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "PASSWORD GENERATOR",
            1 => "",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.label,
            1 => &self.value,
            _ => panic!(),
        }
    }

    fn emphasized(&self, column_index: usize) -> bool {
        column_index == 1 && self.emphasized
    }
}

fn render(widget: &Widget, term: &Term) -> io::Result<()> {
    let config = widget.config();
    let rows = [
        CardRow {
            label: "Password",
            value: widget.password().as_str().to_owned(),
            emphasized: false,
        },
        CardRow {
            label: "Length",
            value: config.length.to_string(),
            emphasized: true,
        },
        CardRow {
            label: "Include Numbers",
            value: yes_no(config.include_numbers),
            emphasized: false,
        },
        CardRow {
            label: "Include Characters",
            value: yes_no(config.include_special_chars),
            emphasized: false,
        },
    ];
    display_table(&rows, &Palette::for_theme(widget.theme()), term)?;
    term.write_line("")
}

fn prompt_length(term: &Term, current: usize) -> Result<usize, ProgError> {
    let (min, max) = (*LENGTH_RANGE.start(), *LENGTH_RANGE.end());
    let length = dialoguer::Input::<usize>::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!("Length ({min}-{max})"))
        .default(current)
        .validate_with(|input: &usize| -> Result<(), String> {
            if LENGTH_RANGE.contains(input) {
                Ok(())
            } else {
                Err(format!("the length must be between {min} and {max}"))
            }
        })
        .interact_text_on(term)
        .context("failed to read the new length")?;
    Ok(length)
}

fn wait_for_key(term: &Term) -> Result<(), ProgError> {
    term.write_line("Press any key to continue.")
        .and_then(|()| term.read_key())
        .context("failed to wait for a key press")?;
    Ok(())
}
