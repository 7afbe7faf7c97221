//! Navigation chrome: hamburger menu, smooth anchor scrolling, the
//! navbar's scrolled state, the back-to-top button, and parallax layers.
//! Scroll position is read by the frame loop and passed in; the only
//! thing nav drives itself is the anchor tween.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::easing::parallax_offset;
use fx_core::easing::ScrollTween;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, BACK_TO_TOP_AT_PX, BACK_TO_TOP_ID, HAMBURGER_ID, NAVBAR_ID, NAV_MENU_ID,
    NAV_OFFSET_PX, NAV_SCROLLED_AT_PX, PARALLAX_SELECTOR, SCROLL_TWEEN_TICKS,
};
use crate::dom;

const SCROLLED_CLASS: &str = "scrolled";
const VISIBLE_CLASS: &str = "visible";

pub struct NavState {
    menu_open: bool,
    tween: Option<ScrollTween>,
    navbar: Option<web::HtmlElement>,
    menu: Option<web::HtmlElement>,
    hamburger: Option<web::HtmlElement>,
    back_to_top: Option<web::HtmlElement>,
    parallax: Vec<(web::HtmlElement, usize)>,
}

impl NavState {
    /// Looks up the page's nav elements. Missing elements are tolerated
    /// so the engine still runs on a stripped-down page.
    pub fn locate(document: &web::Document) -> Self {
        let parallax = dom::query_all(document, PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let layer = el
                    .get_attribute("data-parallax")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                el.dyn_into::<web::HtmlElement>().ok().map(|el| (el, layer))
            })
            .collect();

        Self {
            menu_open: false,
            tween: None,
            navbar: dom::element_by_id(document, NAVBAR_ID),
            menu: dom::element_by_id(document, NAV_MENU_ID),
            hamburger: dom::element_by_id(document, HAMBURGER_ID),
            back_to_top: dom::element_by_id(document, BACK_TO_TOP_ID),
            parallax,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.sync_menu_classes();
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.sync_menu_classes();
        }
    }

    fn sync_menu_classes(&self) {
        if let Some(hamburger) = &self.hamburger {
            dom::set_class(hamburger, ACTIVE_CLASS, self.menu_open);
        }
        if let Some(menu) = &self.menu {
            dom::set_class(menu, ACTIVE_CLASS, self.menu_open);
        }
    }

    /// Begins a glide from the current scroll position to `to`. A new
    /// target replaces any tween already in flight.
    pub fn start_scroll(&mut self, from: f32, to: f32) {
        self.tween = Some(ScrollTween::new(from, to.max(0.0), SCROLL_TWEEN_TICKS));
        log::debug!("[nav] scroll {from:.0} -> {to:.0}");
    }

    /// Advances the anchor tween one tick. Returns the position the page
    /// should be scrolled to, or None when no glide is running.
    pub fn step_tween(&mut self) -> Option<f32> {
        let tween = self.tween.as_mut()?;
        let y = tween.step();
        if tween.done() {
            self.tween = None;
        }
        Some(y)
    }

    /// Reflects the given scroll offset into navbar shadow, back-to-top
    /// visibility, and the parallax layers.
    pub fn apply_scroll(&self, scroll_y: f64) {
        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, SCROLLED_CLASS, scroll_y > NAV_SCROLLED_AT_PX);
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, VISIBLE_CLASS, scroll_y > BACK_TO_TOP_AT_PX);
        }
        for (el, layer) in &self.parallax {
            let offset = parallax_offset(scroll_y as f32, *layer);
            dom::set_style(el, "transform", &format!("translateY({offset:.1}px)"));
        }
    }
}

/// Wires the hamburger, anchor links, and back-to-top button.
pub fn wire(document: &web::Document, nav: &Rc<RefCell<NavState>>) {
    {
        let hamburger = nav.borrow().hamburger.clone();
        if let Some(hamburger) = hamburger {
            let nav = Rc::clone(nav);
            dom::add_click_listener(&hamburger, move || {
                nav.borrow_mut().toggle_menu();
            });
        }
    }

    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let nav = Rc::clone(nav);
        let href = anchor.get_attribute("href").unwrap_or_default();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let mut nav = nav.borrow_mut();
            nav.close_menu();
            let Some(target) = anchor_target(&document, &href) else {
                return;
            };
            nav.start_scroll(current_scroll_y(), target);
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let back_to_top = nav.borrow().back_to_top.clone();
        if let Some(button) = back_to_top {
            let nav = Rc::clone(nav);
            dom::add_click_listener(&button, move || {
                let mut nav = nav.borrow_mut();
                nav.start_scroll(current_scroll_y(), 0.0);
            });
        }
    }
}

/// Resolves an in-page href to a scroll target, compensating for the
/// fixed navbar. `#` alone means the top of the page.
fn anchor_target(document: &web::Document, href: &str) -> Option<f32> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return Some(0.0);
    }
    let el = document.get_element_by_id(id)?;
    let el = el.dyn_ref::<web::HtmlElement>()?;
    Some(el.offset_top() as f32 - NAV_OFFSET_PX)
}

fn current_scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}
