use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use zelion_site::config::SUBSCRIPTION_SECTION_ID;
use zelion_site::scroll::BrowserViewport;
use zelion_site::state::subscription::{SubscriptionAction, SubscriptionState, Ticket};
use zelion_site::subscribe::{claim_offer, deliver, SubscriberHandle};

use crate::components::reveal::Reveal;

pub struct Offer {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const OFFERS: [Offer; 3] = [
    Offer { name: "10% Off Kit", blurb: "Take 10% off any complete batting kit." },
    Offer { name: "Free Grip Pack", blurb: "Three replacement grips with your first bat." },
    Offer { name: "Team Bundle", blurb: "Eleven sets of whites at squad pricing." },
];

#[derive(Properties, PartialEq)]
pub struct OffersProps {
    pub state: UseReducerHandle<SubscriptionState>,
}

#[function_component(Offers)]
pub fn offers(props: &OffersProps) -> Html {
    html! {
        <section id="offers" class="offers">
            <h2>{"Launch offers"}</h2>
            <div class="offers-grid">
                { for OFFERS.iter().map(|offer| {
                    let onclick = {
                        let dispatcher = props.state.dispatcher();
                        let name = offer.name;
                        Callback::from(move |_: MouseEvent| {
                            claim_offer(&BrowserViewport, |action| dispatcher.dispatch(action), name);
                        })
                    };
                    html! {
                        <Reveal class="offer-card">
                            <h3>{ offer.name }</h3>
                            <p>{ offer.blurb }</p>
                            <button class="claim-button" {onclick}>{"Claim offer"}</button>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubscriptionFormProps {
    pub state: UseReducerHandle<SubscriptionState>,
    pub subscriber: SubscriberHandle,
}

#[function_component(SubscriptionForm)]
pub fn subscription_form(props: &SubscriptionFormProps) -> Html {
    let state = props.state.clone();

    // Each accepted submit carries a fresh ticket; hand it to the subscriber.
    {
        let dispatcher = state.dispatcher();
        let subscriber = props.subscriber.clone();
        use_effect_with_deps(
            move |ticket: &Option<Ticket>| {
                if let Some(ticket) = ticket.clone() {
                    spawn_local(async move {
                        let action = deliver(subscriber.0.as_ref(), &ticket).await;
                        dispatcher.dispatch(action);
                    });
                }
                || ()
            },
            state.pending.clone(),
        );
    }

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(SubscriptionAction::EmailInput(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(SubscriptionAction::Submit);
        })
    };

    html! {
        <section id={SUBSCRIPTION_SECTION_ID} class="subscription">
            <h2>{"Get early access"}</h2>
            {
                if let Some(banner) = state.offer_banner() {
                    html! {
                        <div id="selected-offer" class="selected-offer">
                            <i class="fas fa-tag"></i>
                            <span id="selected-offer-text">{ banner }</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.succeeded {
                    html! {
                        <div id="success-message" class="success-message">
                            <i class="fas fa-check-circle"></i>
                            {" Thanks! You're on the list."}
                        </div>
                    }
                } else {
                    html! {
                        <form id="subscription-form" class="subscription-form" {onsubmit}>
                            <input
                                id="email-input"
                                type="text"
                                inputmode="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                value={state.email.clone()}
                                {oninput}
                            />
                            <button id="submit-button" type="submit" disabled={state.is_submitting}>
                                {
                                    if state.is_submitting {
                                        html! { <i class="fas fa-spinner fa-spin"></i> }
                                    } else {
                                        html! { <i class="fas fa-paper-plane"></i> }
                                    }
                                }
                            </button>
                        </form>
                    }
                }
            }
            {
                if let Some(error) = &state.error {
                    html! { <p id="error-message" class="error-message" aria-live="polite">{ error.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
