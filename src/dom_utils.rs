//! dom_utils.rs – show / hide / toggle helpers for named page regions.
//!
//! All helpers are total: an id that is not in the current document is
//! skipped silently, because the template only renders some panels for some
//! pages.

use crate::page::{region, Page};

/// Make the region visible.
pub fn show(page: &dyn Page, id: &str) {
    if let Some(r) = region(page, id) {
        r.show();
    }
}

/// Hide the region.
pub fn hide(page: &dyn Page, id: &str) {
    if let Some(r) = region(page, id) {
        r.hide();
    }
}

/// Hide when shown, otherwise show.
pub fn toggle(page: &dyn Page, id: &str) {
    if let Some(r) = region(page, id) {
        if r.is_shown() {
            r.hide();
        } else {
            r.show();
        }
    }
}

/// Hide every region in `ids`, in order.
pub fn hide_group(page: &dyn Page, ids: &[&str]) {
    for id in ids {
        hide(page, id);
    }
}

/// Hide every other member of `group`, then show `id`.
pub fn reveal_only(page: &dyn Page, group: &[&str], id: &str) {
    for other in group.iter().filter(|other| **other != id) {
        hide(page, other);
    }
    show(page, id);
}
