//! Execution requests: which endpoint a mode hits and how the request URL is
//! assembled from the session and the hidden selection fields.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::constants::{READER_FIELD, WORKFLOW_FIELD, WRITER_FIELD};
use crate::network::SessionContext;
use crate::page::{non_empty_field, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    Run,
    Profile,
    Batch,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Run => "run",
            ExecutionMode::Profile => "profile",
            ExecutionMode::Batch => "batch",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ExecutionMode::Run => "/chap/run",
            ExecutionMode::Profile => "/chap/profile",
            ExecutionMode::Batch => "/chap/batch",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown execution mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for ExecutionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "run" => Ok(ExecutionMode::Run),
            "profile" => Ok(ExecutionMode::Profile),
            "batch" => Ok(ExecutionMode::Batch),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Selection carried by an execution request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub workflow: Option<String>,
    pub reader: Option<String>,
    pub writer: Option<String>,
}

impl Selection {
    /// Read the hidden selection fields; empty or missing fields are `None`.
    pub fn from_page(page: &dyn Page) -> Self {
        Self {
            workflow: non_empty_field(page, WORKFLOW_FIELD),
            reader: non_empty_field(page, READER_FIELD),
            writer: non_empty_field(page, WRITER_FIELD),
        }
    }
}

/// `{base}/chap/{mode}?token=…[&chapworkflow=…][&reader=…][&writer=…]`
///
/// The token is always present; the rest only when selected, in that order.
pub fn build_dispatch_url(session: &SessionContext, selection: &Selection, mode: ExecutionMode) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("token", &session.token);
    if let Some(workflow) = &selection.workflow {
        query.append_pair("chapworkflow", workflow);
    }
    if let Some(reader) = &selection.reader {
        query.append_pair("reader", reader);
    }
    if let Some(writer) = &selection.writer {
        query.append_pair("writer", writer);
    }
    format!("{}{}?{}", session.base, mode.path(), query.finish())
}
