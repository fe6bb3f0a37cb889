// src/messages.rs
//
// Everything that can happen on the workflow builder page, and the side
// effects the reducer asks for in return.
//
use crate::dispatcher::ExecutionMode;
use crate::network::FetchError;
use crate::state::RequestTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Visibility
    ShowRegion(String),
    HideRegion(String),
    ToggleRegion(String),

    // Workflow assembly
    SelectWorkflow(String),
    SelectReader(String),
    SelectWriter(String),
    ClearMenus,

    // Config editor. An empty name means "the selected workflow".
    RequestConfig(String),
    ConfigLoaded {
        workflow: String,
        text: String,
        ticket: RequestTicket,
    },
    SaveConfig,
    ConfigSaved {
        workflow: String,
        result: Result<(), FetchError>,
    },

    // Documentation and tarball viewer
    RequestDoc(String),
    DocLoaded {
        doc_id: String,
        markup: String,
        ticket: RequestTicket,
    },
    RequestTarball(String),
    TarballReady {
        workflow: String,
        ticket: RequestTicket,
    },

    /// A GET exchange failed; `what` names it for the log.
    FetchFailed {
        what: String,
        error: FetchError,
    },

    ReturnToNotebook,

    // Execution
    Dispatch(ExecutionMode),
    NavigationStarted,
}

impl Message {
    /// Translate a `data-chap-action` / `data-chap-value` pair from the
    /// markup into a message.
    pub fn from_action(action: &str, value: &str) -> Option<Message> {
        let value = value.to_string();
        let msg = match action {
            "show" => Message::ShowRegion(value),
            "hide" => Message::HideRegion(value),
            "toggle" => Message::ToggleRegion(value),
            "workflow" => Message::SelectWorkflow(value),
            "reader" => Message::SelectReader(value),
            "writer" => Message::SelectWriter(value),
            "clear-menus" => Message::ClearMenus,
            "config" => Message::RequestConfig(value),
            "save-config" => Message::SaveConfig,
            "doc" => Message::RequestDoc(value),
            "tarball" => Message::RequestTarball(value),
            "notebook" => Message::ReturnToNotebook,
            other => Message::Dispatch(other.parse().ok()?),
        };
        Some(msg)
    }
}

/// Side effects requested by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchConfig {
        workflow: String,
        ticket: RequestTicket,
    },
    SaveConfig {
        workflow: String,
        body: String,
    },
    FetchDoc {
        doc_id: String,
        ticket: RequestTicket,
    },
    FetchTarball {
        workflow: String,
        ticket: RequestTicket,
    },
    DisarmUnloadPrompt,
    Navigate(String),
}
