use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Serialize;

use crate::config;
use crate::error::SubmitError;
use crate::scroll::Viewport;
use crate::state::subscription::{SubscriptionAction, Ticket};

/// The outside world that actually records a subscription.
#[async_trait(?Send)]
pub trait Subscriber {
    fn kind(&self) -> &'static str;
    async fn submit(&self, email: &str, offer: Option<&str>) -> Result<(), SubmitError>;
}

/// Waits a fixed delay and reports success. Used until a real endpoint is
/// configured.
pub struct SimulatedSubscriber {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl Subscriber for SimulatedSubscriber {
    fn kind(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, _email: &str, _offer: Option<&str>) -> Result<(), SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[derive(Serialize)]
pub struct SubscribeRequest<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<&'a str>,
}

pub struct HttpSubscriber {
    pub url: String,
}

#[async_trait(?Send)]
impl Subscriber for HttpSubscriber {
    fn kind(&self) -> &'static str {
        "http"
    }

    async fn submit(&self, email: &str, offer: Option<&str>) -> Result<(), SubmitError> {
        let response = Request::post(&self.url)
            .json(&SubscribeRequest { email, offer })
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(response.status()))
        }
    }
}

/// Shareable subscriber for component props; equal only to itself.
#[derive(Clone)]
pub struct SubscriberHandle(pub Rc<dyn Subscriber>);

impl PartialEq for SubscriberHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SubscriberHandle {
    pub fn for_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(url) => Self(Rc::new(HttpSubscriber { url })),
            None => Self(Rc::new(SimulatedSubscriber { delay_ms: config::SUBMIT_DELAY_MS })),
        }
    }
}

impl Default for SubscriberHandle {
    fn default() -> Self {
        Self::for_endpoint(config::subscribe_endpoint())
    }
}

/// Runs one accepted submission to completion and turns the outcome into
/// the action that closes it.
pub async fn deliver(subscriber: &dyn Subscriber, ticket: &Ticket) -> SubscriptionAction {
    let outcome = subscriber.submit(&ticket.email, ticket.offer.as_deref()).await;
    match &outcome {
        Ok(()) => info!("Subscription #{} accepted ({})", ticket.id, subscriber.kind()),
        Err(e) => error!("Subscription #{} failed ({}): {}", ticket.id, subscriber.kind(), e),
    }
    SubscriptionAction::Completed(outcome)
}

/// Remembers the offer and brings the subscription form into view.
pub fn claim_offer<V, F>(viewport: &V, dispatch: F, offer_name: &str)
where
    V: Viewport + ?Sized,
    F: Fn(SubscriptionAction),
{
    info!("Offer claimed: {}", offer_name);
    dispatch(SubscriptionAction::ClaimOffer(offer_name.to_string()));
    viewport.smooth_scroll_into_view(config::SUBSCRIPTION_SECTION_ID);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::tests::FakeViewport;
    use crate::state::subscription::SubscriptionState;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct Instant {
        fail_with: Option<SubmitError>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl Subscriber for Instant {
        fn kind(&self) -> &'static str {
            "instant"
        }

        async fn submit(&self, _email: &str, _offer: Option<&str>) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn pending(email: &str) -> SubscriptionState {
        SubscriptionState::default()
            .apply(SubscriptionAction::EmailInput(email.into()))
            .apply(SubscriptionAction::Submit)
    }

    #[test]
    fn successful_delivery_completes_submission() {
        let subscriber = Instant { fail_with: None, calls: Cell::new(0) };
        let state = pending("user@example.com");
        let ticket = state.pending.clone().unwrap();

        let action = block_on(deliver(&subscriber, &ticket));
        let done = state.apply(action);

        assert_eq!(subscriber.calls.get(), 1);
        assert!(done.succeeded);
        assert!(done.email.is_empty());
        assert!(!done.is_submitting);
    }

    #[test]
    fn failed_delivery_lands_in_error_slot() {
        let subscriber = Instant {
            fail_with: Some(SubmitError::Network("offline".into())),
            calls: Cell::new(0),
        };
        let state = pending("user@example.com");
        let ticket = state.pending.clone().unwrap();

        let done = state.apply(block_on(deliver(&subscriber, &ticket)));
        assert_eq!(done.error.as_deref(), Some("Could not reach the server: offline"));
        assert!(!done.is_submitting);
    }

    #[test]
    fn claiming_offer_sets_banner_and_scrolls_to_form() {
        let mut viewport = FakeViewport::default();
        viewport.sections.insert(config::SUBSCRIPTION_SECTION_ID.into(), 900.0);
        let state = RefCell::new(SubscriptionState::default());

        claim_offer(&viewport, |a| {
            let next = state.borrow().apply(a);
            *state.borrow_mut() = next;
        }, "10% Off Kit");

        assert_eq!(state.borrow().offer_banner().as_deref(), Some("Selected: 10% Off Kit"));
        assert_eq!(
            *viewport.scrolled_into_view.borrow(),
            vec![config::SUBSCRIPTION_SECTION_ID.to_string()]
        );
    }

    #[test]
    fn default_handle_simulates_submission() {
        if option_env!("ZELION_SUBSCRIBE_PATH").is_none() {
            assert_eq!(SubscriberHandle::default().0.kind(), "simulated");
        }
        assert_eq!(SubscriberHandle::for_endpoint(None).0.kind(), "simulated");
        let http = SubscriberHandle::for_endpoint(Some("/api/subscribe".into()));
        assert_eq!(http.0.kind(), "http");
    }

    #[test]
    fn request_body_omits_missing_offer() {
        let body = serde_json::to_value(SubscribeRequest { email: "a@b.co", offer: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b.co" }));
    }
}
