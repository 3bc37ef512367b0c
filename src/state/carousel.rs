use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Markup passes a signed step (`changeSlide(-1)`); anything above zero
    /// goes forward. A missing or non-numeric step goes back.
    pub fn from_step(step: Option<f64>) -> Self {
        match step {
            Some(step) if step > 0.0 => Direction::Forward,
            _ => Direction::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Advance(Direction),
    JumpTo(i64),
}

/// Which slide is visible. `current` is always `< slide_count` unless there
/// are no slides at all, in which case every action is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub slide_count: usize,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self { current: 0, slide_count }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slide_count > 0 && index == self.current
    }

    pub fn apply(&self, action: CarouselAction) -> Self {
        if self.slide_count == 0 {
            return self.clone();
        }
        let n = self.slide_count;
        let current = match action {
            CarouselAction::Advance(Direction::Forward) => (self.current + 1) % n,
            CarouselAction::Advance(Direction::Backward) => (self.current + n - 1) % n,
            // Out-of-range targets wrap instead of leaving the carousel blank.
            CarouselAction::JumpTo(index) => index.rem_euclid(n as i64) as usize,
        };
        Self { current, slide_count: n }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
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
    fn forward_advances_wrap_modulo_slide_count() {
        for n in 0..12 {
            let mut state = CarouselState::new(4);
            for _ in 0..n {
                state = state.apply(CarouselAction::Advance(Direction::Forward));
            }
            assert_eq!(state.current, n % 4);
        }
    }

    #[test]
    fn backward_from_first_slide_goes_to_last() {
        let state = CarouselState::new(3).apply(CarouselAction::Advance(Direction::Backward));
        assert_eq!(state.current, 2);
    }

    #[test]
    fn jump_sets_index_and_wraps_out_of_range() {
        let state = CarouselState::new(3);
        assert_eq!(state.apply(CarouselAction::JumpTo(1)).current, 1);
        assert_eq!(state.apply(CarouselAction::JumpTo(7)).current, 1);
        assert_eq!(state.apply(CarouselAction::JumpTo(-1)).current, 2);
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let state = CarouselState::new(0);
        assert_eq!(state.apply(CarouselAction::Advance(Direction::Forward)), state);
        assert_eq!(state.apply(CarouselAction::JumpTo(5)), state);
        assert!(!state.is_active(0));
    }

    #[test]
    fn signed_steps_map_to_directions() {
        assert_eq!(Direction::from_step(Some(1.0)), Direction::Forward);
        assert_eq!(Direction::from_step(Some(0.5)), Direction::Forward);
        assert_eq!(Direction::from_step(Some(-1.0)), Direction::Backward);
        assert_eq!(Direction::from_step(Some(0.0)), Direction::Backward);
        assert_eq!(Direction::from_step(Some(f64::NAN)), Direction::Backward);
        assert_eq!(Direction::from_step(None), Direction::Backward);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(0));
        let next = state.clone().reduce(CarouselAction::JumpTo(2));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
