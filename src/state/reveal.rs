use std::rc::Rc;
use yew::Reducible;

/// Snapshot of one IntersectionObserver entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// One-shot "animated in" marker for a single element. Once revealed it
/// never goes back, whatever the element does afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    pub fn observe(self, entry: Visibility) -> Self {
        Self { revealed: self.revealed || entry.is_intersecting }
    }

    pub fn class(&self) -> Option<&'static str> {
        self.revealed.then_some("animate-in")
    }
}

impl Reducible for RevealState {
    type Action = Visibility;

    fn reduce(self: Rc<Self>, entry: Self::Action) -> Rc<Self> {
        let next = (*self).observe(entry);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
