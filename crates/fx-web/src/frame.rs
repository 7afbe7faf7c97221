//! The frame loop. Wall-clock time is folded into fixed ticks by the
//! engine's clock; each due tick advances the simulation and the other
//! tick-driven pieces (toasts, scroll tween, skill ramps), and the DOM
//! is restyled once per animation frame if anything ticked.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fx_core::{EffectEngine, EffectEvent, TickClock};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::nav::NavState;
use crate::notify::Notifier;
use crate::reveal::SkillRamp;
use crate::surface::EffectSurface;

pub struct FrameContext {
    pub window: web::Window,
    pub engine: Rc<RefCell<EffectEngine>>,
    pub surface: EffectSurface,
    pub nav: Rc<RefCell<NavState>>,
    pub notifier: Rc<RefCell<Notifier>>,
    pub ramps: Rc<RefCell<Vec<SkillRamp>>>,
    pub typing_el: Option<web::HtmlElement>,
    pub glitch_el: Option<web::HtmlElement>,
    pub clock: TickClock,
    pub last_instant: Instant,
    pub events: Vec<EffectEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let due = self.clock.advance(dt);
        for _ in 0..due {
            self.events.clear();
            let ticks = {
                let mut engine = self.engine.borrow_mut();
                engine.tick(&mut self.events);
                engine.ticks()
            };
            self.surface.apply_events(&self.events);
            self.notifier.borrow_mut().sweep(ticks);

            if let Some(y) = self.nav.borrow_mut().step_tween() {
                self.window.scroll_to_with_x_and_y(0.0, y as f64);
            }

            self.ramps.borrow_mut().retain_mut(|bar| {
                let percent = bar.ramp.advance();
                dom::set_style(&bar.el, "width", &format!("{percent:.1}%"));
                !bar.ramp.done()
            });
        }

        if due == 0 {
            return;
        }

        {
            let engine = self.engine.borrow();
            self.surface.sync(&engine);
        }
        {
            let mut engine = self.engine.borrow_mut();
            if let Some(text) = engine.typing_text_changed() {
                if let Some(el) = &self.typing_el {
                    el.set_text_content(Some(text));
                }
            }
            if let Some(text) = engine.glitch_text_changed() {
                if let Some(el) = &self.glitch_el {
                    el.set_text_content(Some(text));
                }
            }
        }

        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        self.nav.borrow().apply_scroll(scroll_y);
    }
}

/// Handle for a running animation-frame loop. Dropping it stops the
/// loop and releases the self-referential closure.
pub struct FrameLoop {
    closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if self.closure.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Schedules `ctx.frame()` on every animation frame until stopped.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let slot = Rc::clone(&closure);
    let pending = Rc::clone(&raf_id);
    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(closure) = slot.borrow().as_ref() {
            pending.set(request_animation_frame(closure));
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = closure.borrow().as_ref() {
        raf_id.set(request_animation_frame(first));
    }
    log::info!("[frame] loop started");

    FrameLoop { closure, raf_id }
}

fn request_animation_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web::window()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
