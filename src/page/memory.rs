//! In-memory [`Page`] used by native tests and headless embedding.
//!
//! Mirrors the DOM behaviours the controller depends on: replacing a region's
//! content destroys any editor mounted inside it, and hidden fields live
//! independently of regions.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use super::{Page, Visibility};
use crate::constants::{
    ACTION_BUTTONS, BASE_FIELD, CONFIG_EDITOR_CLASS, CONFIG_REGION, DOC_REGION, MENU_REGIONS,
    NOTEBOOK_FRAME, NOTEBOOK_REGION, PLEASE_WAIT, READER_FIELD, TOKEN_FIELD, USER_FIELD,
    WORKFLOW_FIELD, WORKFLOW_SUMMARY, WRITER_FIELD,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub visibility: Visibility,
    pub content: String,
}

#[derive(Default)]
pub struct MemoryPage {
    regions: RefCell<BTreeMap<String, RegionSnapshot>>,
    fields: RefCell<HashMap<String, String>>,
    // editor id -> region hosting it
    editors: RefCell<HashMap<String, String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document shaped like the rendered notebook page: notebook and action
    /// buttons visible, every other panel hidden, hidden fields empty except
    /// for the session ones.
    pub fn notebook_template(base: &str, token: &str, user: &str) -> Self {
        let page = Self::new()
            .with_region(WORKFLOW_SUMMARY, Visibility::Hidden)
            .with_region(CONFIG_REGION, Visibility::Hidden)
            .with_region(DOC_REGION, Visibility::Hidden)
            .with_region(NOTEBOOK_REGION, Visibility::Shown)
            .with_region(NOTEBOOK_FRAME, Visibility::Shown)
            .with_region(ACTION_BUTTONS, Visibility::Shown)
            .with_region(PLEASE_WAIT, Visibility::Hidden)
            .with_field(BASE_FIELD, base)
            .with_field(TOKEN_FIELD, token)
            .with_field(USER_FIELD, user)
            .with_field(WORKFLOW_FIELD, "")
            .with_field(READER_FIELD, "")
            .with_field(WRITER_FIELD, "");
        for menu in MENU_REGIONS {
            page.add_region(menu, Visibility::Shown);
        }
        page
    }

    pub fn with_region(self, id: &str, visibility: Visibility) -> Self {
        self.add_region(id, visibility);
        self
    }

    pub fn with_field(self, id: &str, value: &str) -> Self {
        self.add_field(id, value);
        self
    }

    pub fn add_region(&self, id: &str, visibility: Visibility) {
        self.regions.borrow_mut().insert(
            id.to_string(),
            RegionSnapshot {
                visibility,
                content: String::new(),
            },
        );
    }

    pub fn add_field(&self, id: &str, value: &str) {
        self.fields.borrow_mut().insert(id.to_string(), value.to_string());
    }

    pub fn remove_region(&self, id: &str) {
        self.regions.borrow_mut().remove(id);
        self.drop_editors_in(id);
    }

    pub fn remove_field(&self, id: &str) {
        self.fields.borrow_mut().remove(id);
        self.editors.borrow_mut().remove(id);
    }

    /// Every region with its current state, ordered by id.
    pub fn snapshot(&self) -> BTreeMap<String, RegionSnapshot> {
        self.regions.borrow().clone()
    }

    fn drop_editors_in(&self, region: &str) {
        let mut editors = self.editors.borrow_mut();
        let doomed: Vec<String> = editors
            .iter()
            .filter(|(_, host)| host.as_str() == region)
            .map(|(editor, _)| editor.clone())
            .collect();
        let mut fields = self.fields.borrow_mut();
        for editor in doomed {
            editors.remove(&editor);
            fields.remove(&editor);
        }
    }
}

impl Page for MemoryPage {
    fn contains(&self, id: &str) -> bool {
        self.regions.borrow().contains_key(id) || self.fields.borrow().contains_key(id)
    }

    fn visibility(&self, id: &str) -> Option<Visibility> {
        self.regions.borrow().get(id).map(|r| r.visibility)
    }

    fn set_visibility(&self, id: &str, visibility: Visibility) {
        if let Some(r) = self.regions.borrow_mut().get_mut(id) {
            r.visibility = visibility;
        }
    }

    fn content(&self, id: &str) -> Option<String> {
        self.regions.borrow().get(id).map(|r| r.content.clone())
    }

    fn replace_content(&self, id: &str, markup: &str) {
        let replaced = match self.regions.borrow_mut().get_mut(id) {
            Some(r) => {
                r.content = markup.to_string();
                true
            }
            None => false,
        };
        if replaced {
            self.drop_editors_in(id);
        }
    }

    fn append_content(&self, id: &str, markup: &str) {
        if let Some(r) = self.regions.borrow_mut().get_mut(id) {
            r.content.push_str(markup);
        }
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.fields.borrow().get(id).cloned()
    }

    fn set_field_value(&self, id: &str, value: &str) {
        if let Some(v) = self.fields.borrow_mut().get_mut(id) {
            *v = value.to_string();
        }
    }

    fn mount_editor(&self, region: &str, editor_id: &str, text: &str) {
        {
            let mut regions = self.regions.borrow_mut();
            let Some(r) = regions.get_mut(region) else {
                return;
            };
            r.content.push_str(&format!(
                "<div><textarea id=\"{}\" class=\"{}\"></textarea></div><br/>",
                editor_id, CONFIG_EDITOR_CLASS
            ));
        }
        self.fields
            .borrow_mut()
            .insert(editor_id.to_string(), text.to_string());
        self.editors
            .borrow_mut()
            .insert(editor_id.to_string(), region.to_string());
    }
}
