//! Runs the side effects `update` queues.  Fetch completions come back as
//! messages through a weak controller handle; if the controller is gone the
//! completion is dropped.

use std::rc::{Rc, Weak};

use crate::messages::{Command, Message};
use crate::network::{ApiClient, FetchError};
use crate::state::Controller;

pub fn execute(controller: &Rc<Controller>, cmd: Command) {
    let base = controller.state().session.base.clone();
    let api = ApiClient::new(&base);

    match cmd {
        Command::FetchConfig { workflow, ticket } => {
            let request = api.get_config(&workflow);
            let weak = Rc::downgrade(controller);
            controller.transport.send(
                request,
                Box::new(move |result| {
                    let msg = match result {
                        Ok(text) => Message::ConfigLoaded {
                            workflow,
                            text,
                            ticket,
                        },
                        Err(error) => failed(format!("Fetching config for {}", workflow), error),
                    };
                    deliver(&weak, msg);
                }),
            );
        }
        Command::SaveConfig { workflow, body } => {
            let request = api.save_config(&workflow, &body);
            let weak = Rc::downgrade(controller);
            controller.transport.send(
                request,
                Box::new(move |result| {
                    // The response text is not used beyond the log line.
                    deliver(
                        &weak,
                        Message::ConfigSaved {
                            workflow,
                            result: result.map(|_| ()),
                        },
                    );
                }),
            );
        }
        Command::FetchDoc { doc_id, ticket } => {
            let request = api.get_doc(&doc_id);
            let weak = Rc::downgrade(controller);
            controller.transport.send(
                request,
                Box::new(move |result| {
                    let msg = match result {
                        Ok(markup) => Message::DocLoaded {
                            doc_id,
                            markup,
                            ticket,
                        },
                        Err(error) => failed(format!("Fetching doc {}", doc_id), error),
                    };
                    deliver(&weak, msg);
                }),
            );
        }
        Command::FetchTarball { workflow, ticket } => {
            let request = api.get_tarball(&workflow);
            let weak = Rc::downgrade(controller);
            controller.transport.send(
                request,
                Box::new(move |result| {
                    let msg = match result {
                        Ok(_) => Message::TarballReady { workflow, ticket },
                        Err(error) => failed(format!("Packing tarball for {}", workflow), error),
                    };
                    deliver(&weak, msg);
                }),
            );
        }
        Command::DisarmUnloadPrompt => controller.navigator.disarm_unload_prompt(),
        Command::Navigate(url) => {
            controller.navigator.navigate(&url);
            controller.dispatch(Message::NavigationStarted);
        }
    }
}

fn failed(what: String, error: FetchError) -> Message {
    Message::FetchFailed { what, error }
}

fn deliver(weak: &Weak<Controller>, msg: Message) {
    if let Some(controller) = weak.upgrade() {
        controller.dispatch(msg);
    }
}
