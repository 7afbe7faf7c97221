//! Input wiring. Listeners stay registered for the life of the page, so
//! every closure is leaked with `forget` after registration. Handlers do
//! the minimum: feed the engine or flip nav state, then return; anything
//! visible happens on the next tick.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::EffectEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::keys::{self, KeyAction};
use crate::nav::NavState;

const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

pub struct InputWiring {
    pub engine: Rc<RefCell<EffectEngine>>,
    pub nav: Rc<RefCell<NavState>>,
}

pub fn wire_input_handlers(window: &web::Window, document: &web::Document, w: InputWiring) {
    {
        let engine = Rc::clone(&w.engine);
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            engine
                .borrow_mut()
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = Rc::clone(&w.engine);
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            engine
                .borrow_mut()
                .on_click(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = Rc::clone(&w.engine);
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            engine.borrow_mut().on_pointer_leave();
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = Rc::clone(&w.engine);
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let width = inner_size(&win.inner_width());
            let height = inner_size(&win.inner_height());
            engine.borrow_mut().set_viewport(width, height);
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let nav = Rc::clone(&w.nav);
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let menu_open = nav.borrow().menu_open();
            match keys::keydown_action(&ev.key(), menu_open) {
                Some(KeyAction::CloseMenu) => nav.borrow_mut().close_menu(),
                Some(KeyAction::MarkKeyboardNav) => {
                    if let Some(body) = doc.body() {
                        dom::add_class(&body, KEYBOARD_NAV_CLASS);
                    }
                }
                None => {}
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            if let Some(body) = doc.body() {
                dom::remove_class(&body, KEYBOARD_NAV_CLASS);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    log::info!("[input] handlers wired");
}

fn inner_size(value: &Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f32 {
    value
        .as_ref()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}
