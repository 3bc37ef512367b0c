//! Same-page navigation: section offsets, anchor interception and smooth
//! scrolling. The page talks to a [`Viewport`] so the offset arithmetic can be
//! checked without a browser.

use log::{debug, warn};
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use wasm_bindgen::JsCast;

use crate::config::HEADER_OFFSET;

pub trait Viewport {
    /// Top of the element with this id, relative to the document.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
    /// Returns false when no such element exists.
    fn smooth_scroll_into_view(&self, id: &str) -> bool;
}

/// Returns the fragment of a same-page link, e.g. `#offers` -> `offers`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}

/// Scrolls so the section sits just below the fixed header. Unknown ids are
/// ignored.
pub fn navigate_to_section<V: Viewport + ?Sized>(viewport: &V, section_id: &str) -> bool {
    match viewport.section_top(section_id) {
        Some(top) => {
            let target = scroll_target(top);
            debug!("Scrolling to #{} at {}", section_id, target);
            viewport.smooth_scroll_to(target);
            true
        }
        None => {
            warn!("No section with id '{}'", section_id);
            false
        }
    }
}

pub struct BrowserViewport;

impl BrowserViewport {
    fn element(id: &str) -> Option<HtmlElement> {
        window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Viewport for BrowserViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        Self::element(id).map(|el| el.offset_top() as f64)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn smooth_scroll_into_view(&self, id: &str) -> bool {
        match Self::element(id) {
            Some(el) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct FakeViewport {
        pub sections: HashMap<String, f64>,
        pub scrolled_to: RefCell<Vec<f64>>,
        pub scrolled_into_view: RefCell<Vec<String>>,
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }

        fn smooth_scroll_into_view(&self, id: &str) -> bool {
            if self.sections.contains_key(id) {
                self.scrolled_into_view.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn anchors_only_match_fragments() {
        assert_eq!(anchor_target("#offers"), Some("offers"));
        assert_eq!(anchor_target("/offers"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn scrolls_to_section_minus_header() {
        let mut viewport = FakeViewport::default();
        viewport.sections.insert("offers".into(), 1200.0);
        assert!(navigate_to_section(&viewport, "offers"));
        assert_eq!(*viewport.scrolled_to.borrow(), vec![1120.0]);
    }

    #[test]
    fn unknown_section_does_not_scroll() {
        let viewport = FakeViewport::default();
        assert!(!navigate_to_section(&viewport, "missing"));
        assert!(viewport.scrolled_to.borrow().is_empty());
    }
}
