//! Toast notifications. Handlers request a toast at any time; the tick
//! sweep materializes pending requests, then slides every live toast in
//! from the right edge, holds it, and slides it back out. All motion is
//! tick-driven rather than CSS animations so timing stays in one place.

use fx_core::easing::ease_in_out_quad;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    TOAST_DISMISS_TICKS, TOAST_SLIDE_IN_TICKS, TOAST_SLIDE_OUT_TICKS, TOAST_STACK_STEP_PX,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn accent(self) -> &'static str {
        match self {
            ToastLevel::Success => "#10b981",
            ToastLevel::Error => "#ef4444",
            ToastLevel::Info => "#6366f1",
        }
    }
}

struct Toast {
    el: web::HtmlElement,
    born_tick: u64,
}

pub struct Notifier {
    document: web::Document,
    pending: Vec<(String, ToastLevel)>,
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            pending: Vec::new(),
            toasts: Vec::new(),
        }
    }

    /// Queues a toast. It appears on the next tick sweep.
    pub fn request(&mut self, message: &str, level: ToastLevel) {
        self.pending.push((message.to_owned(), level));
    }

    /// Advances every toast one tick: materializes pending requests,
    /// slides, restacks, removes the done.
    pub fn sweep(&mut self, now: u64) {
        for (message, level) in std::mem::take(&mut self.pending) {
            self.spawn_toast(&message, level, now);
        }

        self.toasts.retain(|toast| {
            let age = now.saturating_sub(toast.born_tick);
            if age >= TOAST_DISMISS_TICKS + TOAST_SLIDE_OUT_TICKS {
                toast.el.remove();
                return false;
            }
            true
        });

        for (index, toast) in self.toasts.iter().enumerate() {
            let age = now.saturating_sub(toast.born_tick);
            let (offset, opacity) = slide_state(age);
            let top = 20.0 + index as f32 * TOAST_STACK_STEP_PX;
            let style = toast.el.style();
            let _ = style.set_property("top", &format!("{top:.0}px"));
            let _ = style.set_property("transform", &format!("translateX({offset:.1}%)"));
            let _ = style.set_property("opacity", &format!("{opacity:.2}"));
        }
    }

    pub fn active(&self) -> usize {
        self.toasts.len()
    }

    pub fn teardown(&mut self) {
        self.pending.clear();
        for toast in self.toasts.drain(..) {
            toast.el.remove();
        }
    }

    fn spawn_toast(&mut self, message: &str, level: ToastLevel, now: u64) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let _ = el.set_attribute(
            "style",
            &format!(
                "position: fixed; right: 20px; top: 20px; z-index: 10000; \
                 padding: 14px 20px; border-radius: 8px; color: #fff; \
                 background: {}; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25); \
                 max-width: 320px; transform: translateX(110%);",
                level.accent()
            ),
        );
        el.set_text_content(Some(message));
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        let _ = body.append_child(&el);
        self.toasts.push(Toast { el, born_tick: now });
        log::info!("[notify] toast shown: {message}");
    }
}

/// Horizontal offset (percent of own width) and opacity for a toast of
/// the given age. Off-screen is 110% so the shadow clears the viewport.
fn slide_state(age: u64) -> (f32, f32) {
    if age < TOAST_SLIDE_IN_TICKS {
        let t = age as f32 / TOAST_SLIDE_IN_TICKS as f32;
        (110.0 * (1.0 - ease_in_out_quad(t)), 1.0)
    } else if age >= TOAST_DISMISS_TICKS {
        let t = (age - TOAST_DISMISS_TICKS) as f32 / TOAST_SLIDE_OUT_TICKS as f32;
        let f = ease_in_out_quad(t);
        (110.0 * f, 1.0 - f)
    } else {
        (0.0, 1.0)
    }
}
