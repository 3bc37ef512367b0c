use yew::prelude::*;
use yew_hooks::use_interval;

use zelion_site::config::CAROUSEL_AUTOPLAY_MS;
use zelion_site::state::carousel::{CarouselAction, CarouselState, Direction};

use crate::components::reveal::Reveal;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Match-Ready Willow",
        caption: "Grade 1 English willow bats, knocked in and ready for the crease.",
        image: "/images/product-kit.png",
    },
    Slide {
        title: "Built for the Long Innings",
        caption: "Lightweight pads and gloves that keep up from the first over to the last.",
        image: "/images/slide-pads.png",
    },
    Slide {
        title: "Club Kits, Delivered",
        caption: "Outfit the whole squad with one order and team pricing.",
        image: "/images/slide-team.png",
    },
];

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub state: UseReducerHandle<CarouselState>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = props.state.clone();

    {
        let state = state.clone();
        // Zero period turns autoplay off when there is nothing to rotate.
        let period = if state.slide_count > 0 { CAROUSEL_AUTOPLAY_MS } else { 0 };
        use_interval(
            move || state.dispatch(CarouselAction::Advance(Direction::Forward)),
            period,
        );
    }

    if state.slide_count == 0 {
        return html! {};
    }

    let step = |direction: Direction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Advance(direction)))
    };

    html! {
        <section id="gallery" class="carousel" aria-roledescription="carousel">
            <div class="carousel-track">
                { for SLIDES.iter().enumerate().map(|(index, slide)| html! {
                    <div class={classes!("carousel-slide", state.is_active(index).then_some("active"))}>
                        <img src={slide.image} alt={slide.title} />
                        <Reveal class="slide-content">
                            <h3>{ slide.title }</h3>
                            <p>{ slide.caption }</p>
                        </Reveal>
                    </div>
                }) }
            </div>
            <button class="carousel-control prev" aria-label="Previous slide" onclick={step(Direction::Backward)}>
                <i class="fas fa-chevron-left"></i>
            </button>
            <button class="carousel-control next" aria-label="Next slide" onclick={step(Direction::Forward)}>
                <i class="fas fa-chevron-right"></i>
            </button>
            <div class="carousel-indicators" role="tablist">
                { for (0..state.slide_count).map(|index| {
                    let active = state.is_active(index);
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::JumpTo(index as i64)))
                    };
                    html! {
                        <button
                            class={classes!("indicator", active.then_some("active"))}
                            role="tab"
                            aria-selected={active.to_string()}
                            aria-label={format!("Go to slide {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
