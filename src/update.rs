// src/update.rs
//
// The reducer.  DOM writes happen here, synchronously, so no other handler
// can observe a half-applied selection; network and navigation are handed
// back as commands.
//
use crate::constants::{CONFIG_EDITOR, CONFIG_REGION, MENU_REGIONS, READER_FIELD, WORKFLOW_FIELD, WRITER_FIELD};
use crate::dispatcher::{build_dispatch_url, Selection};
use crate::dom_utils::{hide, hide_group, show, toggle};
use crate::messages::{Command, Message};
use crate::page::{field, non_empty_field, Page};
use crate::state::{AppState, FetchSlot, Phase};
use crate::views;
use crate::{debug_log, warn_log};

pub fn update(state: &mut AppState, page: &dyn Page, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if !state.accepts_input() {
        if msg == Message::NavigationStarted {
            state.phase = Phase::Terminal;
        } else {
            debug_log!("Page is leaving, ignoring {:?}", msg);
        }
        return commands;
    }

    match msg {
        Message::ShowRegion(id) => show(page, &id),
        Message::HideRegion(id) if id == CONFIG_REGION => views::close_config(page),
        Message::HideRegion(id) => hide(page, &id),
        Message::ToggleRegion(id) => toggle(page, &id),

        Message::SelectWorkflow(name) => {
            // Summary first: a missing hidden field must never leave it stale.
            views::render_workflow_choice(page, &name);
            if let Some(f) = field(page, WORKFLOW_FIELD) {
                f.set(&name);
            }
            state.phase = Phase::Assembling;
        }
        Message::SelectReader(label) => {
            views::render_reader_choice(page, &label);
            if let Some(f) = field(page, READER_FIELD) {
                f.set(&label);
            }
            state.phase = Phase::Assembling;
        }
        Message::SelectWriter(label) => {
            views::render_writer_choice(page, &label);
            if let Some(f) = field(page, WRITER_FIELD) {
                f.append(&label);
            }
            state.phase = Phase::Assembling;
        }
        Message::ClearMenus => hide_group(page, &MENU_REGIONS),

        Message::RequestConfig(name) => match resolve_workflow(page, name) {
            Some(workflow) => {
                let ticket = state.issue(FetchSlot::Config);
                commands.push(Command::FetchConfig { workflow, ticket });
            }
            None => debug_log!("No workflow selected, config not requested"),
        },
        Message::ConfigLoaded {
            workflow,
            text,
            ticket,
        } => {
            if state.is_current(ticket) {
                views::render_config_editor(page, &text);
            } else {
                debug_log!("Dropping stale config for {}", workflow);
            }
        }
        Message::SaveConfig => {
            views::close_config(page);
            let Some(text) = field(page, CONFIG_EDITOR).map(|f| f.value()) else {
                debug_log!("No config editor on the page, nothing to save");
                return commands;
            };
            let Some(workflow) = non_empty_field(page, WORKFLOW_FIELD) else {
                debug_log!("No workflow selected, config not saved");
                return commands;
            };
            debug_log!("send POST request with workflow config:\n{}", text);
            commands.push(Command::SaveConfig {
                workflow,
                body: text,
            });
        }
        Message::ConfigSaved { workflow, result } => match result {
            Ok(()) => debug_log!("Config for {} saved", workflow),
            // Not surfaced to the user; there is no error panel on the page.
            Err(e) => warn_log!("Saving config for {} failed: {}", workflow, e),
        },

        Message::RequestDoc(doc_id) => {
            if doc_id.is_empty() {
                return commands;
            }
            let ticket = state.issue(FetchSlot::DocResponse);
            commands.push(Command::FetchDoc { doc_id, ticket });
        }
        Message::DocLoaded {
            doc_id,
            markup,
            ticket,
        } => {
            if state.is_current(ticket) {
                views::render_document(page, &markup);
            } else {
                debug_log!("Dropping stale doc {}", doc_id);
            }
        }
        Message::RequestTarball(name) => match resolve_workflow(page, name) {
            Some(workflow) => {
                let ticket = state.issue(FetchSlot::DocResponse);
                commands.push(Command::FetchTarball { workflow, ticket });
            }
            None => debug_log!("No workflow selected, tarball not requested"),
        },
        Message::TarballReady { workflow, ticket } => {
            if state.is_current(ticket) {
                // The response body is not consulted; the link follows the
                // user-area naming convention.
                let url = views::tarball_url(
                    &state.session.base,
                    &state.config.tarball_prefix,
                    &state.session.user,
                    &workflow,
                );
                views::render_tarball_link(page, &url, &workflow);
            } else {
                debug_log!("Dropping stale tarball link for {}", workflow);
            }
        }
        Message::FetchFailed { what, error } => {
            warn_log!("{} failed: {}", what, error);
        }

        Message::ReturnToNotebook => views::render_notebook(page),

        Message::Dispatch(mode) => {
            views::render_pending(page);
            state.phase = Phase::Pending;
            let url = build_dispatch_url(&state.session, &Selection::from_page(page), mode);
            debug_log!("Dispatching {} to {}", mode, url);
            commands.push(Command::DisarmUnloadPrompt);
            commands.push(Command::Navigate(url));
        }
        Message::NavigationStarted => state.phase = Phase::Terminal,
    }

    commands
}

/// The named workflow, or the selected one when the name is empty.
fn resolve_workflow(page: &dyn Page, name: String) -> Option<String> {
    if name.is_empty() {
        non_empty_field(page, WORKFLOW_FIELD)
    } else {
        Some(name)
    }
}
