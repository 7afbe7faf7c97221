//! Light/dark theme switching. The choice lives on the root element's
//! `data-theme` attribute and is deliberately not persisted anywhere.

use std::cell::Cell;
use std::rc::Rc;

use web_sys as web;

use crate::constants::THEME_TOGGLE_SELECTOR;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    #[inline]
    pub fn attr_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon for the toggle button: shows the theme a click switches to.
    #[inline]
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.attr_value());
    }
    if let Some(toggle) = dom::query_all(document, THEME_TOGGLE_SELECTOR).into_iter().next() {
        if let Ok(Some(icon)) = toggle.query_selector("i") {
            icon.set_class_name(theme.icon_class());
        }
    }
    log::debug!("[theme] {}", theme.attr_value());
}

/// Applies the default theme and wires the toggle button, if present.
pub fn wire_toggle(document: &web::Document) -> Rc<Cell<Theme>> {
    let state = Rc::new(Cell::new(Theme::Dark));
    apply(document, state.get());

    if let Some(toggle) = dom::query_all(document, THEME_TOGGLE_SELECTOR).into_iter().next() {
        let document = document.clone();
        let state = Rc::clone(&state);
        dom::add_click_listener(&toggle, move || {
            let next = state.get().toggled();
            state.set(next);
            apply(&document, next);
        });
    }
    state
}
