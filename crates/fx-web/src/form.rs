//! Contact form wiring. Submission never leaves the page: the fields
//! are validated locally and the outcome is reported as a toast.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::validate_contact;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CONTACT_FORM_ID;
use crate::dom;
use crate::notify::{Notifier, ToastLevel};

const NAME_FIELD_ID: &str = "name";
const EMAIL_FIELD_ID: &str = "email";
const MESSAGE_FIELD_ID: &str = "message";
const FIELD_SELECTOR: &str = ".form-group input, .form-group textarea";
const FOCUSED_CLASS: &str = "focused";
const SENT_MESSAGE: &str = "Message sent successfully!";

pub fn wire_form(document: &web::Document, notifier: &Rc<RefCell<Notifier>>) {
    let Some(form) = dom::element_by_id(document, CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[form] no contact form on this page");
        return;
    };

    {
        let form = form.clone();
        let notifier = Rc::clone(notifier);
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let name = field(&form, NAME_FIELD_ID);
            let email = field(&form, EMAIL_FIELD_ID);
            let message = field(&form, MESSAGE_FIELD_ID);
            match validate_contact(&name, &email, &message) {
                Ok(()) => {
                    notifier.borrow_mut().request(SENT_MESSAGE, ToastLevel::Success);
                    form.reset();
                    log::info!("[form] contact form accepted");
                }
                Err(err) => {
                    notifier.borrow_mut().request(&err.to_string(), ToastLevel::Error);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    wire_floating_labels(document);
}

/// Keeps a field's label floated while it has focus or content.
fn wire_floating_labels(document: &web::Document) {
    for el in dom::query_all(document, FIELD_SELECTOR) {
        {
            let el = el.clone();
            let target = el.clone();
            let closure = Closure::wrap(Box::new(move || {
                if let Some(parent) = el.parent_element() {
                    dom::add_class(&parent, FOCUSED_CLASS);
                }
            }) as Box<dyn FnMut()>);
            let _ =
                target.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let el = el.clone();
            let target = el.clone();
            let closure = Closure::wrap(Box::new(move || {
                if dom::field_value(&el).is_empty() {
                    if let Some(parent) = el.parent_element() {
                        dom::remove_class(&parent, FOCUSED_CLASS);
                    }
                }
            }) as Box<dyn FnMut()>);
            let _ =
                target.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

fn field(form: &web::HtmlFormElement, id: &str) -> String {
    form.query_selector(&format!("#{id}"))
        .ok()
        .flatten()
        .map(|el| dom::field_value(&el))
        .unwrap_or_default()
}
