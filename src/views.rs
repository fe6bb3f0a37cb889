// src/views.rs
//
// Markup for the workflow summary and the three swappable panels.  Every
// function here reveals its target before writing to it, and panel writes
// replace the previous content wholesale.
//
use crate::constants::{
    ACTION_ATTR, ACTION_BUTTONS, BUTTON_CLASS, CONFIG_EDITOR, CONFIG_REGION, DOC_REGION,
    EXCLUSIVE_VIEWS, NOTEBOOK_REGION, PENDING_HIDDEN, PLEASE_WAIT, READER_CONNECTOR, VALUE_ATTR,
    WORKFLOW_SUMMARY, WRITER_SUFFIX,
};
use crate::dom_utils::{hide_group, reveal_only, show};
use crate::page::{region, Page};
use crate::utils::escape_html;

fn action_button(label: &str, action: &str, value: &str) -> String {
    format!(
        "<a href=\"#\" class=\"{}\" {}=\"{}\" {}=\"{}\">{}</a>",
        BUTTON_CLASS,
        ACTION_ATTR,
        action,
        VALUE_ATTR,
        escape_html(value),
        label
    )
}

/// Label for the chosen workflow plus the button that opens its config.
pub fn workflow_label(name: &str) -> String {
    format!(
        "{} workflow&nbsp;{}",
        escape_html(name),
        action_button("Config", "config", name)
    )
}

pub fn render_workflow_choice(page: &dyn Page, name: &str) {
    if let Some(summary) = region(page, WORKFLOW_SUMMARY) {
        summary.show();
        summary.replace(&workflow_label(name));
    }
}

pub fn render_reader_choice(page: &dyn Page, label: &str) {
    if let Some(summary) = region(page, WORKFLOW_SUMMARY) {
        summary.show();
        summary.append(&escape_html(label));
        summary.append(READER_CONNECTOR);
    }
}

pub fn render_writer_choice(page: &dyn Page, label: &str) {
    if let Some(summary) = region(page, WORKFLOW_SUMMARY) {
        summary.show();
        summary.append(&escape_html(label));
        summary.append(WRITER_SUFFIX);
    }
}

/// Hide and Save buttons followed by an editor holding `text`.
pub fn render_config_editor(page: &dyn Page, text: &str) {
    reveal_only(page, &EXCLUSIVE_VIEWS, CONFIG_REGION);
    if let Some(panel) = region(page, CONFIG_REGION) {
        let mut actions = action_button("Hide", "hide", CONFIG_REGION);
        actions.push_str(&action_button("Save", "save-config", ""));
        panel.replace(&actions);
        panel.mount_editor(CONFIG_EDITOR, text);
    }
}

/// Put the config panel away.  When it was the visible view the notebook
/// takes its place again.
pub fn close_config(page: &dyn Page) {
    if let Some(panel) = region(page, CONFIG_REGION) {
        if panel.is_shown() {
            panel.hide();
            show(page, NOTEBOOK_REGION);
        }
    }
}

/// Server-rendered documentation, inserted as returned.
pub fn render_document(page: &dyn Page, markup: &str) {
    reveal_only(page, &EXCLUSIVE_VIEWS, DOC_REGION);
    if let Some(panel) = region(page, DOC_REGION) {
        panel.replace(markup);
    }
}

/// `base` is empty when the page carries no base URL, which leaves the
/// usual root-relative `/usrs/{user}/{workflow}.tar.gz`.
pub fn tarball_url(base: &str, prefix: &str, user: &str, workflow: &str) -> String {
    format!("{}{}/{}/{}.tar.gz", base, prefix, user, workflow)
}

pub fn render_tarball_link(page: &dyn Page, url: &str, workflow: &str) {
    reveal_only(page, &EXCLUSIVE_VIEWS, DOC_REGION);
    if let Some(panel) = region(page, DOC_REGION) {
        panel.replace(&format!(
            "Workflow tarball: <a href=\"{}\" download>{}.tar.gz</a>",
            escape_html(url),
            escape_html(workflow)
        ));
    }
}

/// Clear the doc and config panels and bring back the notebook and its
/// action buttons.
pub fn render_notebook(page: &dyn Page) {
    for id in [DOC_REGION, CONFIG_REGION] {
        if let Some(panel) = region(page, id) {
            panel.replace("");
        }
    }
    reveal_only(page, &EXCLUSIVE_VIEWS, NOTEBOOK_REGION);
    show(page, ACTION_BUTTONS);
}

pub fn render_pending(page: &dyn Page) {
    hide_group(page, &PENDING_HIDDEN);
    show(page, PLEASE_WAIT);
}
