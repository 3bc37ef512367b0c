use std::rc::Rc;
use yew::Reducible;

use crate::config::NAVBAR_SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkClicked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavbarState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(y) => Self { scrolled: y > NAVBAR_SCROLL_THRESHOLD, ..self },
            NavAction::ToggleMenu => Self { menu_open: !self.menu_open, ..self },
            NavAction::LinkClicked => Self { menu_open: false, ..self },
        }
    }

    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }
}

impl Reducible for NavbarState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_past_threshold() {
        let state = NavbarState::default();
        assert!(!state.apply(NavAction::Scrolled(20.0)).scrolled);
        assert!(state.apply(NavAction::Scrolled(21.0)).scrolled);
        assert!(!state.apply(NavAction::Scrolled(300.0)).apply(NavAction::Scrolled(0.0)).scrolled);
    }

    #[test]
    fn toggle_flips_menu_and_icon() {
        let open = NavbarState::default().apply(NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert_eq!(open.menu_icon(), "fas fa-times");
        let closed = open.apply(NavAction::ToggleMenu);
        assert_eq!(closed.menu_icon(), "fas fa-bars");
    }

    #[test]
    fn link_click_closes_menu() {
        let state = NavbarState { scrolled: true, menu_open: true }.apply(NavAction::LinkClicked);
        assert_eq!(state, NavbarState { scrolled: true, menu_open: false });
    }
}
