use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{ACTION_ATTR, VALUE_ATTR};
use crate::messages::Message;
use crate::state::Controller;

/// One click listener on the document handles every element carrying a
/// `data-chap-action` attribute, including markup inserted after start-up.
pub fn install_click_delegation(document: &Document, controller: &Rc<Controller>) -> Result<(), JsValue> {
    let weak = Rc::downgrade(controller);
    let selector = format!("[{}]", ACTION_ATTR);

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(trigger)) = target.closest(&selector) else {
            return;
        };
        let Some(action) = trigger.get_attribute(ACTION_ATTR) else {
            return;
        };
        let value = trigger.get_attribute(VALUE_ATTR).unwrap_or_default();

        match Message::from_action(&action, &value) {
            Some(msg) => {
                event.prevent_default();
                controller.dispatch(msg);
            }
            None => crate::warn_log!("Unknown {} '{}'", ACTION_ATTR, action),
        }
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
