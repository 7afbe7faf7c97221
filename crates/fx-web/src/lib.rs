#![cfg(target_arch = "wasm32")]

//! Browser front end for the portfolio effects. Everything stateful is
//! built once at startup, parked in a thread-local, and driven from a
//! single animation-frame loop; `shutdown` tears the whole thing down
//! again, DOM nodes included.

pub mod constants;
pub mod dom;
pub mod events;
pub mod form;
pub mod frame;
pub mod keys;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod surface;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::constants::{MAX_TICKS_PER_FRAME, TICK_HZ};
use fx_core::{EffectEngine, EffectsConfig, TickClock, Viewport};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct App {
    frame_loop: frame::FrameLoop,
    ctx: Rc<RefCell<frame::FrameContext>>,
    observer: Option<web::IntersectionObserver>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[app] fx-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("[app] no document, nothing to do");
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(boot) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        boot();
    }
}

fn boot() {
    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(err) => log::error!("[app] init failed: {err:#}"),
    }
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0) as f32;

    let seed = js_sys::Date::now() as u64;
    let viewport = Viewport::new(width, height);
    let mut engine = EffectEngine::new(EffectsConfig::default(), viewport, seed)?;

    let typing_el = dom::element_by_id(&document, constants::TYPING_EL_ID);
    let glitch_el = dom::element_by_id(&document, constants::GLITCH_EL_ID);
    if let Some(el) = &glitch_el {
        let base = el.text_content().unwrap_or_default();
        engine.set_glitch_base(base.trim());
    }

    let engine = Rc::new(RefCell::new(engine));
    let surface = surface::EffectSurface::new(&document)?;
    let nav = Rc::new(RefCell::new(nav::NavState::locate(&document)));
    let notifier = Rc::new(RefCell::new(notify::Notifier::new(&document)));
    let ramps = Rc::new(RefCell::new(Vec::new()));

    let _ = theme::wire_toggle(&document);
    nav::wire(&document, &nav);
    form::wire_form(&document, &notifier);
    let observer = reveal::wire_reveal(&document, &ramps);
    events::wire_input_handlers(
        &window,
        &document,
        events::InputWiring {
            engine: Rc::clone(&engine),
            nav: Rc::clone(&nav),
        },
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        engine,
        surface,
        nav,
        notifier,
        ramps,
        typing_el,
        glitch_el,
        clock: TickClock::new(TICK_HZ, MAX_TICKS_PER_FRAME),
        last_instant: Instant::now(),
        events: Vec::new(),
    }));
    let frame_loop = frame::start_loop(Rc::clone(&ctx));

    log::info!("[app] running at {width:.0}x{height:.0}");
    Ok(App {
        frame_loop,
        ctx,
        observer,
    })
}

/// Stops the loop and removes every node the effects created.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        let Some(app) = slot.borrow_mut().take() else {
            return;
        };
        app.frame_loop.stop();
        if let Some(observer) = &app.observer {
            observer.disconnect();
        }
        let mut ctx = app.ctx.borrow_mut();
        ctx.surface.teardown();
        ctx.notifier.borrow_mut().teardown();
        log::info!("[app] shut down");
    });
}
