//! The "Copied!" flag shown after a password is copied, and its delayed reset.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Default)]
struct State {
    copied: bool,
    /// Bumped on every `mark_copied`/`reset`; a pending reset only fires if it still matches.
    generation: u64,
}

pub struct CopyIndicator {
    state: Arc<Mutex<State>>,
    reset_delay: Duration,
}

impl CopyIndicator {
    pub fn new() -> CopyIndicator {
        Self::with_reset_delay(DEFAULT_RESET_DELAY)
    }

    pub fn with_reset_delay(reset_delay: Duration) -> CopyIndicator {
        CopyIndicator {
            state: Arc::new(Mutex::new(State::default())),
            reset_delay,
        }
    }

    /// Set the flag, and schedule it to clear after the reset delay.
    ///
    /// Any reset scheduled by an earlier call is superseded.
    pub fn mark_copied(&self) {
        let generation = {
            let mut state = lock(&self.state);
            state.copied = true;
            state.generation += 1;
            state.generation
        };

        let state = Arc::clone(&self.state);
        let delay = self.reset_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let mut state = lock(&state);
            if state.generation == generation {
                state.copied = false;
            }
        });
    }

    /// Clear the flag now, cancelling any pending reset.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.copied = false;
        state.generation += 1;
    }

    pub fn is_copied(&self) -> bool {
        lock(&self.state).copied
    }
}

impl Default for CopyIndicator {
    fn default() -> CopyIndicator {
        CopyIndicator::new()
    }
}

// The state is two plain fields, so it is still coherent if a holder panicked.
fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
