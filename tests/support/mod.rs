//! Test doubles for driving a [`Controller`](chapbook_frontend::state::Controller)
//! without a browser: a transport that parks requests until the test
//! completes them, and a navigator that records where the page went.

use std::cell::{Cell, RefCell};

use chapbook_frontend::navigation::Navigator;
use chapbook_frontend::network::{Completion, FetchError, HttpRequest, Transport};

/// Holds every sent request with its completion.  Tests decide when, and in
/// which order, completions run.
#[derive(Default)]
pub struct RecordingTransport {
    sent: RefCell<Vec<(HttpRequest, Option<Completion>)>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().iter().map(|(req, _)| req.clone()).collect()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.sent.borrow().last().map(|(req, _)| req.clone())
    }

    /// Number of requests whose completion has not run yet.
    pub fn outstanding(&self) -> usize {
        self.sent.borrow().iter().filter(|(_, done)| done.is_some()).count()
    }

    /// Run the completion of request `index`.  Returns `false` when it has
    /// already run or does not exist.
    pub fn complete(&self, index: usize, result: Result<String, FetchError>) -> bool {
        let completion = self
            .sent
            .borrow_mut()
            .get_mut(index)
            .and_then(|(_, done)| done.take());
        // Borrow released before the callback re-enters the controller.
        match completion {
            Some(on_done) => {
                on_done(result);
                true
            }
            None => false,
        }
    }

    pub fn respond(&self, index: usize, body: &str) -> bool {
        self.complete(index, Ok(body.to_string()))
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: HttpRequest, on_done: Completion) {
        self.sent.borrow_mut().push((request, Some(on_done)));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    disarmed: Cell<bool>,
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unload_prompt_disarmed(&self) -> bool {
        self.disarmed.get()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn disarm_unload_prompt(&self) {
        self.disarmed.set(true);
    }

    fn navigate(&self, url: &str) {
        // Navigation must come after the prompt is disarmed.
        assert!(self.disarmed.get(), "navigated with the unload prompt armed");
        self.visits.borrow_mut().push(url.to_string());
    }
}
