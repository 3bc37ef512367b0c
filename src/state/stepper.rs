use std::rc::Rc;
use yew::Reducible;

pub const STEP_COUNT: usize = 3;
pub const LAST_STEP: usize = STEP_COUNT - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn class(self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepperState {
    pub current: usize,
}

impl Default for StepperState {
    // The page ships with the flow already on its last step.
    fn default() -> Self {
        Self { current: LAST_STEP }
    }
}

impl StepperState {
    pub fn apply(self, action: StepAction) -> Self {
        let current = match action {
            StepAction::Next => (self.current + 1).min(LAST_STEP),
            StepAction::Previous => self.current.saturating_sub(1),
        };
        Self { current }
    }

    /// Shared by step circles and step titles.
    pub fn status_of(&self, index: usize) -> StepStatus {
        if index < self.current {
            StepStatus::Completed
        } else if index == self.current {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        }
    }

    /// Connector `index` sits between step `index` and `index + 1`.
    pub fn connector_completed(&self, index: usize) -> bool {
        index < self.current
    }

    pub fn connector_progress(&self, index: usize) -> &'static str {
        if self.connector_completed(index) {
            "100%"
        } else {
            "0%"
        }
    }
}

impl Reducible for StepperState {
    type Action = StepAction;

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
    fn starts_on_last_step() {
        assert_eq!(StepperState::default().current, 2);
    }

    #[test]
    fn next_is_clamped_at_last_step() {
        let state = StepperState { current: 2 }.apply(StepAction::Next);
        assert_eq!(state.current, 2);
    }

    #[test]
    fn previous_is_clamped_at_first_step() {
        let state = StepperState { current: 0 }.apply(StepAction::Previous);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn walks_through_the_flow() {
        let mut state = StepperState { current: 0 };
        state = state.apply(StepAction::Next);
        assert_eq!(state.current, 1);
        state = state.apply(StepAction::Previous).apply(StepAction::Previous);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn statuses_compare_index_to_current() {
        let state = StepperState { current: 1 };
        assert_eq!(state.status_of(0), StepStatus::Completed);
        assert_eq!(state.status_of(1), StepStatus::Current);
        assert_eq!(state.status_of(2), StepStatus::Upcoming);
        assert_eq!(state.status_of(2).class(), "upcoming");
    }

    #[test]
    fn connectors_fill_up_to_current_step() {
        let state = StepperState { current: 1 };
        assert_eq!(state.connector_progress(0), "100%");
        assert_eq!(state.connector_progress(1), "0%");
        assert!(!StepperState { current: 0 }.connector_completed(0));
    }
}
