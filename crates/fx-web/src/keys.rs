// Pure key mapping, kept DOM-free so it tests on the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Escape with the mobile menu open.
    CloseMenu,
    /// Tab anywhere: the page switches to keyboard-focus styling.
    MarkKeyboardNav,
}

#[inline]
pub fn keydown_action(key: &str, menu_open: bool) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" if menu_open => Some(KeyAction::CloseMenu),
        "Tab" => Some(KeyAction::MarkKeyboardNav),
        _ => None,
    }
}
