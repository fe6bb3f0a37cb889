//! Drives a controller over an in-memory page, completing network exchanges
//! by hand to exercise the sequencing between selections, fetches, saves and
//! the final execution request.
//!
//! Run with: cargo test --test workflow_builder_flow

mod support;

use std::rc::Rc;

use chapbook_frontend::constants::{
    ACTION_BUTTONS, CONFIG_EDITOR, CONFIG_REGION, DOC_REGION, NOTEBOOK_FRAME, NOTEBOOK_REGION,
    PLEASE_WAIT, WORKFLOW_FIELD, WORKFLOW_SUMMARY,
};
use chapbook_frontend::dispatcher::ExecutionMode;
use chapbook_frontend::messages::Message;
use chapbook_frontend::network::{ClientConfig, FetchError, Method, ResponseOrdering};
use chapbook_frontend::page::{MemoryPage, Page, Visibility};
use chapbook_frontend::state::{Controller, Phase};

use support::{RecordingNavigator, RecordingTransport};

const BASE: &str = "https://chap.example.org";

struct Harness {
    page: Rc<MemoryPage>,
    transport: Rc<RecordingTransport>,
    navigator: Rc<RecordingNavigator>,
    controller: Rc<Controller>,
}

fn harness_with(config: ClientConfig) -> Harness {
    let page = Rc::new(MemoryPage::notebook_template(BASE, "tok1", "alice"));
    let transport = Rc::new(RecordingTransport::new());
    let navigator = Rc::new(RecordingNavigator::new());
    let controller = Controller::from_page(
        config,
        page.clone(),
        transport.clone(),
        navigator.clone(),
    );
    Harness {
        page,
        transport,
        navigator,
        controller,
    }
}

fn harness() -> Harness {
    harness_with(ClientConfig::default())
}

impl Harness {
    fn send(&self, msg: Message) {
        self.controller.dispatch(msg);
    }

    fn visibility(&self, id: &str) -> Option<Visibility> {
        self.page.visibility(id)
    }
}

#[test]
fn select_fetch_edit_save_and_run() {
    let h = harness();

    h.send(Message::SelectWorkflow("basic".into()));
    assert!(h.page.content(WORKFLOW_SUMMARY).unwrap().contains("basic workflow"));
    assert_eq!(h.page.field_value(WORKFLOW_FIELD).as_deref(), Some("basic"));

    h.send(Message::RequestConfig("basic".into()));
    let get = h.transport.last_request().unwrap();
    assert_eq!(get.method, Method::Get);
    assert_eq!(get.url, format!("{}/chap/config/basic", BASE));

    assert!(h.transport.respond(0, "key: value"));
    assert_eq!(h.visibility(CONFIG_REGION), Some(Visibility::Shown));
    assert_eq!(h.page.field_value(CONFIG_EDITOR).as_deref(), Some("key: value"));
    let panel = h.page.content(CONFIG_REGION).unwrap();
    assert!(panel.contains(">Hide</a>"));
    assert!(panel.contains(">Save</a>"));
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Hidden));

    // User edits the text area.
    h.page.set_field_value(CONFIG_EDITOR, "key: value2");
    h.send(Message::SaveConfig);
    assert_eq!(h.visibility(CONFIG_REGION), Some(Visibility::Hidden));
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Shown));
    let post = h.transport.last_request().unwrap();
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.url, format!("{}/chap/config/basic", BASE));
    assert_eq!(post.body.as_deref(), Some("key: value2"));

    // The save response changes nothing on the page.
    let before = h.page.snapshot();
    assert!(h.transport.respond(1, "success"));
    assert_eq!(h.page.snapshot(), before);

    h.send(Message::Dispatch(ExecutionMode::Run));
    assert!(h.navigator.unload_prompt_disarmed());
    assert_eq!(
        h.navigator.visits(),
        vec![format!("{}/chap/run?token=tok1&chapworkflow=basic", BASE)]
    );
    assert_eq!(h.controller.state().phase, Phase::Terminal);
}

#[test]
fn saved_body_is_byte_identical() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::RequestConfig(String::new()));
    h.transport.respond(0, "T0");

    let edited = "pipeline:\n  - reader: {path: \"a b&c.csv\"}\n\t# </textarea> ünïcode\n";
    h.page.set_field_value(CONFIG_EDITOR, edited);
    h.send(Message::SaveConfig);
    assert_eq!(h.transport.last_request().unwrap().body.as_deref(), Some(edited));
}

#[test]
fn profile_with_reader_and_writers() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::SelectReader("CSVReader".into()));
    h.send(Message::SelectWriter("A".into()));
    h.send(Message::SelectWriter("B".into()));
    h.send(Message::ClearMenus);
    h.send(Message::Dispatch(ExecutionMode::Profile));

    assert_eq!(
        h.navigator.visits(),
        vec![format!(
            "{}/chap/profile?token=tok1&chapworkflow=basic&reader=CSVReader&writer=AB",
            BASE
        )]
    );
}

#[test]
fn dispatch_switches_to_pending_display() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::Dispatch(ExecutionMode::Batch));

    for id in [NOTEBOOK_REGION, NOTEBOOK_FRAME, CONFIG_REGION, DOC_REGION, ACTION_BUTTONS] {
        assert_eq!(h.visibility(id), Some(Visibility::Hidden), "{} should be hidden", id);
    }
    assert_eq!(h.visibility(PLEASE_WAIT), Some(Visibility::Shown));
}

#[test]
fn completions_after_dispatch_are_ignored() {
    let h = harness();
    h.send(Message::RequestDoc("CSVReader".into()));
    h.send(Message::Dispatch(ExecutionMode::Run));

    let before = h.page.snapshot();
    assert!(h.transport.respond(0, "<h1>CSVReader</h1>"));
    assert_eq!(h.page.snapshot(), before);
}

#[test]
fn notebook_and_doc_views_are_exclusive() {
    let h = harness();

    h.send(Message::RequestDoc("CSVReader".into()));
    assert_eq!(h.transport.last_request().unwrap().url, format!("{}/chap/doc/CSVReader", BASE));
    h.transport.respond(0, "<h1>CSVReader</h1>");
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Hidden));
    assert_eq!(h.visibility(DOC_REGION), Some(Visibility::Shown));
    assert_eq!(h.page.content(DOC_REGION).as_deref(), Some("<h1>CSVReader</h1>"));

    h.send(Message::ReturnToNotebook);
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Shown));
    assert_eq!(h.visibility(ACTION_BUTTONS), Some(Visibility::Shown));
    for id in [DOC_REGION, CONFIG_REGION] {
        assert_eq!(h.visibility(id), Some(Visibility::Hidden));
        assert_eq!(h.page.content(id).as_deref(), Some(""));
    }
}

#[test]
fn config_view_hides_doc_view() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::RequestDoc("CSVReader".into()));
    h.send(Message::RequestConfig("basic".into()));
    h.transport.respond(0, "<p>doc</p>");
    h.transport.respond(1, "key: value");

    let shown: Vec<&str> = [NOTEBOOK_REGION, DOC_REGION, CONFIG_REGION, PLEASE_WAIT]
        .into_iter()
        .filter(|id| h.visibility(id) == Some(Visibility::Shown))
        .collect();
    assert_eq!(shown, vec![CONFIG_REGION]);
}

#[test]
fn returning_to_notebook_discards_the_editor() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::RequestConfig("basic".into()));
    h.transport.respond(0, "key: value");
    h.send(Message::ReturnToNotebook);

    h.send(Message::SaveConfig);
    assert_eq!(h.transport.requests().len(), 1, "no POST without an editor");
}

#[test]
fn tarball_link_ignores_response_body() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::RequestTarball(String::new()));
    assert_eq!(h.transport.last_request().unwrap().url, format!("{}/chap/tar/basic", BASE));

    h.transport.respond(0, "<html>some other path</html>");
    let content = h.page.content(DOC_REGION).unwrap();
    assert!(content.contains(&format!("href=\"{}/usrs/alice/basic.tar.gz\"", BASE)));
    assert!(!content.contains("some other path"));
}

#[test]
fn failed_fetch_leaves_region_untouched() {
    let h = harness();
    h.send(Message::SelectWorkflow("basic".into()));
    h.send(Message::RequestConfig("basic".into()));

    let before = h.page.snapshot();
    h.transport.complete(
        0,
        Err(FetchError::Status {
            code: 500,
            text: "Internal Server Error".into(),
        }),
    );
    assert_eq!(h.page.snapshot(), before);
    assert_eq!(h.visibility(CONFIG_REGION), Some(Visibility::Hidden));
}

#[test]
fn unanswered_fetch_keeps_page_interactive() {
    let h = harness();
    h.send(Message::RequestConfig("basic".into()));
    assert_eq!(h.transport.outstanding(), 1);

    h.send(Message::SelectReader("CSVReader".into()));
    assert_eq!(h.page.field_value("reader").as_deref(), Some("CSVReader"));
}

#[test]
fn out_of_order_completions_last_write_wins() {
    let h = harness();
    h.send(Message::RequestDoc("first".into()));
    h.send(Message::RequestDoc("second".into()));

    h.transport.respond(1, "second doc");
    h.transport.respond(0, "first doc");
    assert_eq!(h.page.content(DOC_REGION).as_deref(), Some("first doc"));
}

#[test]
fn out_of_order_completions_discard_stale() {
    let h = harness_with(ClientConfig {
        response_ordering: ResponseOrdering::DiscardStale,
        ..ClientConfig::default()
    });
    h.send(Message::RequestDoc("first".into()));
    h.send(Message::RequestDoc("second".into()));

    h.transport.respond(1, "second doc");
    h.transport.respond(0, "first doc");
    assert_eq!(h.page.content(DOC_REGION).as_deref(), Some("second doc"));
}

#[test]
fn missing_regions_are_tolerated_throughout() {
    let page = Rc::new(MemoryPage::new().with_field("token", "tok1"));
    let transport = Rc::new(RecordingTransport::new());
    let navigator = Rc::new(RecordingNavigator::new());
    let controller = Controller::from_page(
        ClientConfig {
            base_url: Some(BASE.into()),
            ..ClientConfig::default()
        },
        page.clone(),
        transport.clone(),
        navigator.clone(),
    );

    controller.dispatch(Message::SelectWorkflow("basic".into()));
    controller.dispatch(Message::SelectWriter("W".into()));
    controller.dispatch(Message::ClearMenus);
    controller.dispatch(Message::RequestConfig("basic".into()));
    transport.respond(0, "key: value");
    controller.dispatch(Message::ReturnToNotebook);
    controller.dispatch(Message::Dispatch(ExecutionMode::Run));

    // No selection fields on the page, so only the token travels.
    assert_eq!(navigator.visits(), vec![format!("{}/chap/run?token=tok1", BASE)]);
}

#[test]
fn region_removed_while_fetch_is_outstanding() {
    let h = harness();
    h.send(Message::RequestDoc("CSVReader".into()));
    h.page.remove_region(DOC_REGION);

    assert!(h.transport.respond(0, "<h1>CSVReader</h1>"));
    assert_eq!(h.page.content(DOC_REGION), None);
    // The remaining exclusive views still follow the doc request.
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Hidden));

    h.send(Message::ReturnToNotebook);
    assert_eq!(h.visibility(NOTEBOOK_REGION), Some(Visibility::Shown));
}
