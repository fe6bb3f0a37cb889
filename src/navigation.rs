//! Leaving the page.

use crate::warn_log;

pub trait Navigator {
    /// Drop the "leave this page?" prompt so the next navigation proceeds
    /// without an interstitial.
    fn disarm_unload_prompt(&self);
    /// Full-page navigation; the current document is discarded.
    fn navigate(&self, url: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn disarm_unload_prompt(&self) {
        if let Some(window) = web_sys::window() {
            window.set_onbeforeunload(None);
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            warn_log!("Navigation to {} failed: {:?}", url, e);
        }
    }
}
