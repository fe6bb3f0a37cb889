// Element ids the notebook page template renders. Every one of them may be
// missing; lookups go through `page::region` / `page::field`.

// Visible regions
pub const WORKFLOW_SUMMARY: &str = "workflow";
pub const CONFIG_REGION: &str = "workflowconfig";
pub const DOC_REGION: &str = "doc-response";
pub const NOTEBOOK_REGION: &str = "notebook";
pub const NOTEBOOK_FRAME: &str = "chap-notebook";
pub const ACTION_BUTTONS: &str = "chap-buttons";
pub const PLEASE_WAIT: &str = "please-wait";

/// Selection pickers collapsed once a choice is made.
pub const MENU_REGIONS: [&str; 4] = ["workflows", "readers", "writers", "processors"];

/// At most one of these is shown at a time.
pub const EXCLUSIVE_VIEWS: [&str; 4] = [NOTEBOOK_REGION, DOC_REGION, CONFIG_REGION, PLEASE_WAIT];

/// Surfaces taken down when an execution request leaves the page.
pub const PENDING_HIDDEN: [&str; 5] = [
    NOTEBOOK_REGION,
    NOTEBOOK_FRAME,
    CONFIG_REGION,
    DOC_REGION,
    ACTION_BUTTONS,
];

// Hidden fields
pub const BASE_FIELD: &str = "base";
pub const TOKEN_FIELD: &str = "token";
pub const USER_FIELD: &str = "user";
pub const WORKFLOW_FIELD: &str = "chapworkflow";
pub const READER_FIELD: &str = "reader";
pub const WRITER_FIELD: &str = "writer";

/// Text area mounted inside the config region.
pub const CONFIG_EDITOR: &str = "config-textarea";
pub const CONFIG_EDITOR_CLASS: &str = "wflowconfig";

// Summary markup
pub const READER_CONNECTOR: &str = "&nbsp; reader &nbsp; &rarr; &nbsp; Processor &nbsp; &rarr; &nbsp;";
pub const WRITER_SUFFIX: &str = "&nbsp; writer";
pub const BUTTON_CLASS: &str = "button button-small button-round";

// Click delegation attributes
pub const ACTION_ATTR: &str = "data-chap-action";
pub const VALUE_ATTR: &str = "data-chap-value";

// Visibility classes used by the page stylesheet
pub const SHOW_CLASS: &str = "show";
pub const HIDE_CLASS: &str = "hide";

pub const DEFAULT_TARBALL_PREFIX: &str = "/usrs";
