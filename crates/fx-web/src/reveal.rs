//! Scroll-reveal. One IntersectionObserver watches the reveal targets
//! and the skill bars; a node is revealed once and then unobserved.
//! Skill bars don't animate here, they enqueue a ramp for the frame
//! loop to advance tick by tick.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::easing::Ramp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, SKILL_BAR_SELECTOR, SKILL_RAMP_STEP,
};
use crate::dom;

const REVEALED_CLASS: &str = "animate-in";

/// A skill bar growing toward its `data-width` percentage.
pub struct SkillRamp {
    pub el: web::HtmlElement,
    pub ramp: Ramp,
}

/// Starts observing reveal targets and skill bars. The returned observer
/// must be kept alive and disconnected at shutdown.
pub fn wire_reveal(
    document: &web::Document,
    ramps: &Rc<RefCell<Vec<SkillRamp>>>,
) -> Option<web::IntersectionObserver> {
    let ramps = Rc::clone(ramps);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(width) = target.get_attribute("data-width") {
                    let width = width.trim_end_matches('%').trim().parse().unwrap_or(100.0);
                    if let Ok(el) = target.clone().dyn_into::<web::HtmlElement>() {
                        ramps.borrow_mut().push(SkillRamp {
                            el,
                            ramp: Ramp::new(0.0, width, SKILL_RAMP_STEP),
                        });
                    }
                } else {
                    dom::add_class(&target, REVEALED_CLASS);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .ok()?;
    callback.forget();

    let mut observed = 0usize;
    for el in dom::query_all(document, REVEAL_SELECTOR) {
        observer.observe(&el);
        observed += 1;
    }
    for el in dom::query_all(document, SKILL_BAR_SELECTOR) {
        observer.observe(&el);
        observed += 1;
    }
    log::info!("[reveal] observing {observed} nodes");
    Some(observer)
}
