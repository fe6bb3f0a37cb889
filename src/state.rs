use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::command_executors;
use crate::messages::Message;
use crate::navigation::Navigator;
use crate::network::{ClientConfig, ResponseOrdering, SessionContext, Transport};
use crate::page::Page;
use crate::update::update;

/// Where the page is in its lifecycle.  `Pending` and `Terminal` only move
/// forward; once an execution request has been built nothing else is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Assembling,
    Pending,
    Terminal,
}

/// Regions that receive fetch results.  Doc and tarball responses share the
/// doc-response panel, so they share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSlot {
    Config,
    DocResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub slot: FetchSlot,
    pub seq: u64,
}

pub struct AppState {
    pub session: SessionContext,
    pub config: ClientConfig,
    pub phase: Phase,
    // Newest request issued per slot
    latest: HashMap<FetchSlot, u64>,
    next_seq: u64,
}

impl AppState {
    pub fn new(session: SessionContext, config: ClientConfig) -> Self {
        Self {
            session,
            config,
            phase: Phase::Idle,
            latest: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Stamp a new request for `slot`.  Sequence numbers are monotonic
    /// across all slots.
    pub fn issue(&mut self, slot: FetchSlot) -> RequestTicket {
        self.next_seq += 1;
        self.latest.insert(slot, self.next_seq);
        RequestTicket {
            slot,
            seq: self.next_seq,
        }
    }

    /// Whether a completion carrying `ticket` may touch its region.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        match self.config.response_ordering {
            ResponseOrdering::LastWriteWins => true,
            ResponseOrdering::DiscardStale => self.latest.get(&ticket.slot) == Some(&ticket.seq),
        }
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Assembling)
    }
}

/// Owns the state and the collaborators a page session needs.  Network
/// callbacks hold a `Weak` back-reference and re-enter through `dispatch`.
pub struct Controller {
    state: RefCell<AppState>,
    pub(crate) page: Rc<dyn Page>,
    pub(crate) transport: Rc<dyn Transport>,
    pub(crate) navigator: Rc<dyn Navigator>,
}

impl Controller {
    pub fn new(
        state: AppState,
        page: Rc<dyn Page>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            page,
            transport,
            navigator,
        })
    }

    /// Build a controller whose session is read from the page itself.
    pub fn from_page(
        config: ClientConfig,
        page: Rc<dyn Page>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Rc<Self> {
        let session = SessionContext::from_page(page.as_ref(), &config);
        Self::new(AppState::new(session, config), page, transport, navigator)
    }

    /// Run one message to completion, then execute the commands it queued.
    pub fn dispatch(self: &Rc<Self>, msg: Message) {
        let commands = {
            let mut state = self.state.borrow_mut();
            update(&mut state, self.page.as_ref(), msg)
        };
        // Borrow released: executors may re-enter `dispatch` synchronously.
        for cmd in commands {
            command_executors::execute(self, cmd);
        }
    }

    /// Apply new options and re-read the session fields.  Selections and
    /// outstanding requests are kept.
    pub fn reconfigure(&self, config: ClientConfig) {
        let session = SessionContext::from_page(self.page.as_ref(), &config);
        let mut state = self.state.borrow_mut();
        state.session = session;
        state.config = config;
    }

    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn page(&self) -> &dyn Page {
        self.page.as_ref()
    }
}
