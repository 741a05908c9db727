//! Fetch parameters for the screen controller.
//!
//! [`FetchConfig`] groups the static parameters the
//! [`ScreenController`](crate::use_cases::screen_controller::ScreenController)
//! consults when it starts or tears down work.

use serde::{Deserialize, Serialize};

/// StackExchange refuses page sizes above this.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fetch control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Number of questions requested by a list refresh.
    pub page_size: u32,
    /// Hide the busy indicator when teardown cancels in-flight work.
    ///
    /// Off by default: a torn-down screen is about to disappear, so a
    /// cancelled fetch is left completely silent.
    pub hide_busy_on_cancel: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            hide_busy_on_cancel: false,
        }
    }
}

impl FetchConfig {
    // ==================== Builder Methods ====================

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_hide_busy_on_cancel(mut self, hide: bool) -> Self {
        self.hide_busy_on_cancel = hide;
        self
    }
}
