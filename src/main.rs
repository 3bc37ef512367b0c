use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use zelion_site::state::navbar::{NavAction, NavbarState};

mod bindings;
mod components {
    pub mod carousel;
    pub mod reveal;
    pub mod stepper;
    pub mod subscription;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to Zelion Cricket"}</Link<Route>>
                </div>
            }
        },
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#gallery", "Gear"),
    ("#offers", "Offers"),
    ("#how-it-works", "How it works"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavbarState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let scroll_window = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                dispatcher.dispatch(NavAction::Scrolled(scroll_y));
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    // The anchor itself is handled by the page-wide click listener.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let on_link = e
                .target_dyn_into::<web_sys::Element>()
                .map_or(false, |el| el.tag_name().eq_ignore_ascii_case("a"));
            if on_link {
                state.dispatch(NavAction::LinkClicked);
            }
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", state.scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Zelion Cricket"}</a>

                <button
                    id="menu-toggle"
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={state.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <i id="menu-icon" class={state.menu_icon()}></i>
                </button>
                <div id="nav-links" class={classes!("nav-links", state.menu_open.then_some("open"))} onclick={close_menu}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a class="nav-link" href={*href}>{ *label }</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(move |_| {
        let document = web_sys::window().unwrap().document().unwrap();
        let click_callback = bindings::anchor_click_handler();

        document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
            .unwrap();

        move || {
            document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                .unwrap();
        }
    }, ());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    if let Some(window) = window() {
        bindings::install_error_logger(&window);
        bindings::register_service_worker(&window);
    }
    yew::Renderer::<App>::new().render();
}
