use chrono::{Datelike, Local};
use yew::prelude::*;

use zelion_site::state::carousel::CarouselState;
use zelion_site::state::stepper::StepperState;
use zelion_site::state::subscription::SubscriptionState;
use zelion_site::subscribe::SubscriberHandle;

use crate::bindings::{Dispatchers, GlobalBindings};
use crate::components::carousel::{Carousel, SLIDES};
use crate::components::reveal::Reveal;
use crate::components::stepper::Stepper;
use crate::components::subscription::{Offers, SubscriptionForm};

#[derive(Properties, PartialEq, Default)]
pub struct LandingProps {
    #[prop_or_default]
    pub subscriber: SubscriberHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let carousel = use_reducer(|| CarouselState::new(SLIDES.len()));
    let stepper = use_reducer(StepperState::default);
    let subscription = use_reducer(SubscriptionState::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let dispatchers = Dispatchers {
            carousel: carousel.dispatcher(),
            stepper: stepper.dispatcher(),
            subscription: subscription.dispatcher(),
        };
        use_effect_with_deps(
            move |_| {
                let bindings = web_sys::window().map(|window| GlobalBindings::install(window, dispatchers));
                move || drop(bindings)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <h1>{"Zelion Cricket"}</h1>
                <p class="hero-subtitle">
                    {"Professional-grade cricket gear for clubs, schools and weekend heroes."}
                </p>
                <a class="hero-cta" href="#offers">{"See the launch offers"}</a>
            </section>

            <Carousel state={carousel} />

            <section id="features" class="features">
                <h2>{"Why Zelion"}</h2>
                <div class="bento-grid">
                    <Reveal class="bento-card">
                        <h3>{"Hand-selected willow"}</h3>
                        <p>{"Every cleft is graded by hand before it is pressed."}</p>
                    </Reveal>
                    <Reveal class="bento-card">
                        <h3>{"Fitted protection"}</h3>
                        <p>{"Pads, gloves and helmets sized for juniors through seniors."}</p>
                    </Reveal>
                    <Reveal class="bento-card">
                        <h3>{"Squad pricing"}</h3>
                        <p>{"Order for the whole club and the price drops with every kit."}</p>
                    </Reveal>
                </div>
            </section>

            <Offers state={subscription.clone()} />

            <Stepper state={stepper} />

            <SubscriptionForm state={subscription} subscriber={props.subscriber.clone()} />

            <section id="contact" class="contact">
                <h2>{"Talk to us"}</h2>
                <div class="contact-grid">
                    <Reveal class="contact-card">
                        <i class="fas fa-envelope"></i>
                        <a href="mailto:hello@zelioncricket.com">{"hello@zelioncricket.com"}</a>
                    </Reveal>
                    <Reveal class="contact-card">
                        <i class="fas fa-map-marker-alt"></i>
                        <span>{"Visit the showroom by appointment"}</span>
                    </Reveal>
                </div>
            </section>

            <footer class="site-footer">
                <p>{ format!("© {} Zelion Cricket", Local::now().year()) }</p>
                <a href="#home">{"Back to top"}</a>
            </footer>
        </div>
    }
}
