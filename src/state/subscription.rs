use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

use crate::error::{SubmitError, ValidationError};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Trims `raw` and checks it looks like an address. Returns the trimmed
/// address on success.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::Malformed);
    }
    Ok(email.to_string())
}

/// A submission that passed validation and is waiting for the collaborator.
/// `id` changes for every accepted submit so effects can key on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u32,
    pub email: String,
    pub offer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubscriptionAction {
    EmailInput(String),
    Submit,
    Completed(Result<(), SubmitError>),
    ClaimOffer(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    pub email: String,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub succeeded: bool,
    pub selected_offer: Option<String>,
    pub pending: Option<Ticket>,
    next_ticket: u32,
}

impl SubscriptionState {
    pub fn apply(&self, action: SubscriptionAction) -> Self {
        let mut next = self.clone();
        match action {
            SubscriptionAction::EmailInput(value) => {
                next.email = value;
            }
            SubscriptionAction::Submit => {
                if self.is_submitting {
                    return next;
                }
                match validate_email(&self.email) {
                    Ok(email) => {
                        next.is_submitting = true;
                        next.error = None;
                        next.pending = Some(Ticket {
                            id: self.next_ticket,
                            email,
                            offer: self.selected_offer.clone(),
                        });
                        next.next_ticket = self.next_ticket.wrapping_add(1);
                    }
                    Err(e) => next.error = Some(e.to_string()),
                }
            }
            SubscriptionAction::Completed(outcome) => {
                if !self.is_submitting {
                    return next;
                }
                next.is_submitting = false;
                next.pending = None;
                match outcome {
                    Ok(()) => {
                        next.succeeded = true;
                        next.email.clear();
                        next.selected_offer = None;
                    }
                    Err(e) => next.error = Some(e.to_string()),
                }
            }
            SubscriptionAction::ClaimOffer(name) => {
                next.selected_offer = Some(name);
            }
        }
        next
    }

    pub fn offer_banner(&self) -> Option<String> {
        self.selected_offer.as_ref().map(|name| format!("Selected: {}", name))
    }
}

impl Reducible for SubscriptionState {
    type Action = SubscriptionAction;

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

    fn typed(email: &str) -> SubscriptionState {
        SubscriptionState::default().apply(SubscriptionAction::EmailInput(email.to_string()))
    }

    #[test]
    fn empty_email_is_rejected() {
        let state = typed("   ").apply(SubscriptionAction::Submit);
        assert_eq!(state.error.as_deref(), Some("Please enter your email address"));
        assert!(!state.is_submitting);
        assert!(state.pending.is_none());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let state = typed("not-an-email").apply(SubscriptionAction::Submit);
        assert_eq!(state.error.as_deref(), Some("Please enter a valid email address"));
        assert!(state.pending.is_none());
    }

    #[test]
    fn pattern_edge_cases() {
        assert!(validate_email(" user@example.com ").is_ok());
        assert_eq!(validate_email("a@b"), Err(ValidationError::Malformed));
        assert_eq!(validate_email("a b@c.d"), Err(ValidationError::Malformed));
        assert_eq!(validate_email("a@@c.d"), Err(ValidationError::Malformed));
        assert_eq!(validate_email("a@c."), Err(ValidationError::Malformed));
    }

    #[test]
    fn valid_email_starts_submission_and_clears_old_error() {
        let state = typed("bad")
            .apply(SubscriptionAction::Submit)
            .apply(SubscriptionAction::EmailInput("user@example.com".into()))
            .apply(SubscriptionAction::Submit);
        assert!(state.is_submitting);
        assert_eq!(state.error, None);
        assert_eq!(state.pending.as_ref().map(|t| t.email.as_str()), Some("user@example.com"));
    }

    #[test]
    fn second_submit_while_pending_changes_nothing() {
        let pending = typed("user@example.com").apply(SubscriptionAction::Submit);
        assert_eq!(pending.apply(SubscriptionAction::Submit), pending);
        let retyped = pending.apply(SubscriptionAction::EmailInput("".into()));
        assert_eq!(retyped.apply(SubscriptionAction::Submit).pending, pending.pending);
    }

    #[test]
    fn success_resets_form_and_offer() {
        let state = typed("user@example.com")
            .apply(SubscriptionAction::ClaimOffer("10% Off Kit".into()))
            .apply(SubscriptionAction::Submit);
        assert_eq!(state.pending.as_ref().and_then(|t| t.offer.as_deref()), Some("10% Off Kit"));

        let done = state.apply(SubscriptionAction::Completed(Ok(())));
        assert!(done.succeeded);
        assert!(!done.is_submitting);
        assert!(done.email.is_empty());
        assert_eq!(done.selected_offer, None);
        assert_eq!(done.offer_banner(), None);
    }

    #[test]
    fn failure_reports_error_and_releases_guard() {
        let done = typed("user@example.com")
            .apply(SubscriptionAction::Submit)
            .apply(SubscriptionAction::Completed(Err(SubmitError::Rejected(500))));
        assert!(!done.is_submitting);
        assert!(!done.succeeded);
        assert_eq!(done.email, "user@example.com");
        assert_eq!(done.error.as_deref(), Some("Subscription was rejected (status 500)"));
    }

    #[test]
    fn tickets_get_fresh_ids() {
        let first = typed("user@example.com").apply(SubscriptionAction::Submit);
        let second = first
            .apply(SubscriptionAction::Completed(Err(SubmitError::Network("offline".into()))))
            .apply(SubscriptionAction::Submit);
        assert_ne!(first.pending.map(|t| t.id), second.pending.map(|t| t.id));
    }

    #[test]
    fn stray_completion_is_ignored() {
        let idle = typed("user@example.com");
        assert_eq!(idle.apply(SubscriptionAction::Completed(Ok(()))), idle);
    }

    #[test]
    fn claimed_offer_banner_text() {
        let state = SubscriptionState::default()
            .apply(SubscriptionAction::ClaimOffer("10% Off Kit".into()));
        assert_eq!(state.offer_banner().as_deref(), Some("Selected: 10% Off Kit"));
    }
}
