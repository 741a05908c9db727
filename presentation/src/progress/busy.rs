//! Busy indicator backed by an indicatif spinner

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// On/off spinner shown while a screen has a fetch in flight.
///
/// `show` while already visible only updates the message; `hide` clears it.
pub struct BusyIndicator {
    enabled: bool,
    hidden_target: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl BusyIndicator {
    /// Spinner drawn to stderr.
    pub fn new() -> Self {
        Self {
            enabled: true,
            hidden_target: false,
            bar: Mutex::new(None),
        }
    }

    /// Never draws anything (`--quiet`, `show_progress = false`).
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            hidden_target: false,
            bar: Mutex::new(None),
        }
    }

    /// Tracks state like [`new`](Self::new) but draws to a hidden target.
    pub fn headless() -> Self {
        Self {
            enabled: true,
            hidden_target: true,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn show(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut bar = self.lock();
        if let Some(pb) = bar.as_ref() {
            pb.set_message(message.to_string());
            return;
        }

        let pb = if self.hidden_target {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        if !self.hidden_target {
            pb.enable_steady_tick(Duration::from_millis(100));
        }
        *bar = Some(pb);
    }

    pub fn hide(&self) {
        if let Some(pb) = self.lock().take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.lock().is_some()
    }

    /// Run `f` with the spinner temporarily cleared so printed lines are not
    /// interleaved with it.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        let bar = self.lock().clone();
        match bar {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_hide() {
        let busy = BusyIndicator::headless();
        assert!(!busy.is_visible());
        busy.show("Fetching");
        assert!(busy.is_visible());
        busy.show("Still fetching");
        assert!(busy.is_visible());
        busy.hide();
        assert!(!busy.is_visible());
    }

    #[test]
    fn test_hide_when_hidden_is_noop() {
        let busy = BusyIndicator::headless();
        busy.hide();
        assert!(!busy.is_visible());
    }

    #[test]
    fn test_disabled_never_shows() {
        let busy = BusyIndicator::disabled();
        busy.show("Fetching");
        assert!(!busy.is_visible());
    }

    #[test]
    fn test_suspend_returns_value() {
        let busy = BusyIndicator::headless();
        busy.show("Fetching");
        assert_eq!(busy.suspend(|| 7), 7);
        assert_eq!(BusyIndicator::disabled().suspend(|| "x"), "x");
    }
}
