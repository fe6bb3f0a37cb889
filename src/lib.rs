use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod macros;

pub mod command_executors;
pub mod constants;
pub mod dispatcher;
pub mod dom_utils;
pub mod logging;
pub mod messages;
pub mod navigation;
pub mod network;
pub mod page;
pub mod state;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;

use crate::dispatcher::ExecutionMode;
use crate::messages::Message;
use crate::navigation::BrowserNavigator;
use crate::network::{ClientConfig, FetchTransport};
use crate::page::{DomPage, Page};
use crate::state::Controller;

// The page's controller, reachable from the exported entry points below.
thread_local! {
    static CONTROLLER: RefCell<Option<Rc<Controller>>> = RefCell::new(None);
}

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let config = ClientConfig::default();
    logging::set_debug_enabled(config.debug_logging);

    let page: Rc<dyn Page> = Rc::new(DomPage::new(document.clone()));
    let controller = Controller::from_page(
        config,
        page,
        Rc::new(FetchTransport),
        Rc::new(BrowserNavigator),
    );
    ui::events::install_click_delegation(&document, &controller)?;

    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

/// Apply client options (a plain object or a JSON string with
/// `ClientConfig` keys) and re-read the session fields.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config: ClientConfig = if options.is_undefined() || options.is_null() {
        ClientConfig::default()
    } else if let Some(json) = options.as_string() {
        ClientConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    logging::set_debug_enabled(config.debug_logging);
    if let Some(controller) = current_controller() {
        controller.reconfigure(config);
    }
    Ok(())
}

fn current_controller() -> Option<Rc<Controller>> {
    CONTROLLER.with(|slot| slot.borrow().clone())
}

fn send(msg: Message) {
    // Clone the handle out first so the slot is not borrowed during dispatch.
    match current_controller() {
        Some(controller) => controller.dispatch(msg),
        None => warn_log!("Workflow builder not started, dropping {:?}", msg),
    }
}

// ---------------------------------------------------------------------------
// Entry points for page templates
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = showRegion)]
pub fn show_region(id: &str) {
    send(Message::ShowRegion(id.to_string()));
}

#[wasm_bindgen(js_name = hideRegion)]
pub fn hide_region(id: &str) {
    send(Message::HideRegion(id.to_string()));
}

#[wasm_bindgen(js_name = toggleRegion)]
pub fn toggle_region(id: &str) {
    send(Message::ToggleRegion(id.to_string()));
}

#[wasm_bindgen(js_name = selectWorkflow)]
pub fn select_workflow(name: &str) {
    send(Message::SelectWorkflow(name.to_string()));
}

#[wasm_bindgen(js_name = selectReader)]
pub fn select_reader(label: &str) {
    send(Message::SelectReader(label.to_string()));
}

#[wasm_bindgen(js_name = selectWriter)]
pub fn select_writer(label: &str) {
    send(Message::SelectWriter(label.to_string()));
}

#[wasm_bindgen(js_name = clearMenus)]
pub fn clear_menus() {
    send(Message::ClearMenus);
}

#[wasm_bindgen(js_name = fetchWorkflowConfig)]
pub fn fetch_workflow_config(workflow: &str) {
    send(Message::RequestConfig(workflow.to_string()));
}

#[wasm_bindgen(js_name = saveWorkflowConfig)]
pub fn save_workflow_config() {
    send(Message::SaveConfig);
}

#[wasm_bindgen(js_name = fetchDoc)]
pub fn fetch_doc(doc_id: &str) {
    send(Message::RequestDoc(doc_id.to_string()));
}

#[wasm_bindgen(js_name = fetchTarball)]
pub fn fetch_tarball(workflow: &str) {
    send(Message::RequestTarball(workflow.to_string()));
}

#[wasm_bindgen(js_name = showNotebook)]
pub fn show_notebook() {
    send(Message::ReturnToNotebook);
}

/// `mode` is one of `run`, `profile`, `batch`.
#[wasm_bindgen(js_name = dispatchExecution)]
pub fn dispatch_execution(mode: &str) -> Result<(), JsValue> {
    let mode: ExecutionMode = mode
        .parse()
        .map_err(|e: dispatcher::UnknownMode| JsValue::from_str(&e.to_string()))?;
    send(Message::Dispatch(mode));
    Ok(())
}
