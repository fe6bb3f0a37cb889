//! Page access layer.
//!
//! Everything the controller knows about the document goes through the
//! [`Page`] trait, so the same reducer drives the real DOM ([`DomPage`]) and
//! an in-memory document ([`MemoryPage`]) used by tests.  Elements are reached
//! through [`region`] and [`field`], which hand out `Option` handles: a missing
//! element is an ordinary `None`, and every caller treats it as a no-op.

pub mod dom;
pub mod memory;

pub use dom::DomPage;
pub use memory::MemoryPage;

use crate::constants::{HIDE_CLASS, SHOW_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Visibility::Shown => SHOW_CLASS,
            Visibility::Hidden => HIDE_CLASS,
        }
    }
}

/// Id-addressed view of the document.
///
/// Implementations must tolerate ids that do not exist: reads return `None`
/// and writes do nothing.  Methods take `&self` because the DOM is shared,
/// interior-mutable state.
pub trait Page {
    fn contains(&self, id: &str) -> bool;

    /// `None` when the element is absent.
    fn visibility(&self, id: &str) -> Option<Visibility>;
    fn set_visibility(&self, id: &str, visibility: Visibility);

    fn content(&self, id: &str) -> Option<String>;
    fn replace_content(&self, id: &str, markup: &str);
    fn append_content(&self, id: &str, markup: &str);

    /// Value of an `<input>` / `<textarea>`; `None` when absent.
    fn field_value(&self, id: &str) -> Option<String>;
    fn set_field_value(&self, id: &str, value: &str);

    /// Append an editable text area with id `editor_id`, pre-filled with
    /// `text`, to the end of `region`.
    fn mount_editor(&self, region: &str, editor_id: &str, text: &str);
}

/// Handle to a region that exists in the current document.
#[derive(Clone, Copy)]
pub struct Region<'p> {
    page: &'p dyn Page,
    id: &'p str,
}

pub fn region<'p>(page: &'p dyn Page, id: &'p str) -> Option<Region<'p>> {
    page.contains(id).then_some(Region { page, id })
}

impl<'p> Region<'p> {
    pub fn visibility(&self) -> Visibility {
        self.page.visibility(self.id).unwrap_or(Visibility::Hidden)
    }

    pub fn is_shown(&self) -> bool {
        self.visibility() == Visibility::Shown
    }

    pub fn show(&self) {
        self.page.set_visibility(self.id, Visibility::Shown);
    }

    pub fn hide(&self) {
        self.page.set_visibility(self.id, Visibility::Hidden);
    }

    /// Replace the whole content; nothing from a previous write survives.
    pub fn replace(&self, markup: &str) {
        self.page.replace_content(self.id, markup);
    }

    pub fn append(&self, markup: &str) {
        self.page.append_content(self.id, markup);
    }

    pub fn mount_editor(&self, editor_id: &str, text: &str) {
        self.page.mount_editor(self.id, editor_id, text);
    }
}

/// Handle to a hidden (or editable) form field.
#[derive(Clone, Copy)]
pub struct Field<'p> {
    page: &'p dyn Page,
    id: &'p str,
}

pub fn field<'p>(page: &'p dyn Page, id: &'p str) -> Option<Field<'p>> {
    page.field_value(id).map(|_| Field { page, id })
}

impl<'p> Field<'p> {
    pub fn value(&self) -> String {
        self.page.field_value(self.id).unwrap_or_default()
    }

    pub fn set(&self, value: &str) {
        self.page.set_field_value(self.id, value);
    }

    pub fn append(&self, value: &str) {
        let mut current = self.value();
        current.push_str(value);
        self.set(&current);
    }
}

/// Value of a field, treating an absent field and an empty one alike.
pub fn non_empty_field(page: &dyn Page, id: &str) -> Option<String> {
    field(page, id).map(|f| f.value()).filter(|v| !v.is_empty())
}
