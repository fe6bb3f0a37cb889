//! [`Page`] over the live browser document.
//!
//! Visibility follows the page stylesheet: the `show` / `hide` classes are
//! swapped on the element while any other classes are left alone.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use super::{Page, Visibility};
use crate::constants::{CONFIG_EDITOR_CLASS, SHOW_CLASS};

pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Page for DomPage {
    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn visibility(&self, id: &str) -> Option<Visibility> {
        self.element(id).map(|el| {
            if el.class_list().contains(SHOW_CLASS) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            }
        })
    }

    fn set_visibility(&self, id: &str, visibility: Visibility) {
        if let Some(el) = self.element(id) {
            let classes = el.class_list();
            let _ = classes.remove_1(visibility.flipped().class_name());
            let _ = classes.add_1(visibility.class_name());
        }
    }

    fn content(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.inner_html())
    }

    fn replace_content(&self, id: &str, markup: &str) {
        if let Some(el) = self.element(id) {
            el.set_inner_html(markup);
        }
    }

    fn append_content(&self, id: &str, markup: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.insert_adjacent_html("beforeend", markup);
        }
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }

    fn set_field_value(&self, id: &str, value: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn mount_editor(&self, region: &str, editor_id: &str, text: &str) {
        let Some(host) = self.element(region) else {
            return;
        };
        // The text goes in through `value`, never through markup, so the
        // editor holds exactly what the server sent.
        let (Ok(wrapper), Ok(editor)) = (
            self.document.create_element("div"),
            self.document.create_element("textarea"),
        ) else {
            return;
        };
        editor.set_id(editor_id);
        editor.set_class_name(CONFIG_EDITOR_CLASS);
        if let Some(area) = editor.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(text);
        }
        let _ = wrapper.append_child(&editor);
        let _ = host.append_child(&wrapper);
        let _ = host.insert_adjacent_html("beforeend", "<br/>");
    }
}

// ---------------------------------------------------------------------------
// Browser tests (wasm-pack test --headless --chrome)
// ---------------------------------------------------------------------------
