//! Page-wide hooks: `window.*` entry points for markup-driven triggers,
//! same-page anchor interception, the uncaught-error logger and service
//! worker registration.

use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Reflect;
use web_sys::{Element, ErrorEvent, MouseEvent, Window};
use yew::UseReducerDispatcher;

use zelion_site::config::SERVICE_WORKER_PATH;
use zelion_site::scroll::{anchor_target, navigate_to_section, BrowserViewport};
use zelion_site::state::carousel::{CarouselAction, CarouselState, Direction};
use zelion_site::state::stepper::{StepAction, StepperState};
use zelion_site::state::subscription::SubscriptionState;
use zelion_site::subscribe::claim_offer;

pub struct Dispatchers {
    pub carousel: UseReducerDispatcher<CarouselState>,
    pub stepper: UseReducerDispatcher<StepperState>,
    pub subscription: UseReducerDispatcher<SubscriptionState>,
}

type Entry = Closure<dyn Fn(JsValue)>;

/// Functions installed on `window`. Dropping this removes them again.
pub struct GlobalBindings {
    window: Window,
    entries: Vec<(&'static str, Entry)>,
}

impl GlobalBindings {
    pub fn install(window: Window, dispatchers: Dispatchers) -> Self {
        let Dispatchers { carousel, stepper, subscription } = dispatchers;
        let mut bindings = Self { window, entries: Vec::new() };

        let slides = carousel.clone();
        bindings.bind("changeSlide", move |direction| {
            slides.dispatch(CarouselAction::Advance(Direction::from_step(direction.as_f64())));
        });
        bindings.bind("goToSlide", move |index| match index.as_f64() {
            Some(index) => carousel.dispatch(CarouselAction::JumpTo(index as i64)),
            None => warn!("goToSlide needs a numeric index"),
        });
        bindings.bind("claimOffer", move |name| match name.as_string() {
            Some(name) => claim_offer(&BrowserViewport, |action| subscription.dispatch(action), &name),
            None => warn!("claimOffer needs an offer name"),
        });
        let next = stepper.clone();
        bindings.bind("nextStep", move |_| next.dispatch(StepAction::Next));
        bindings.bind("previousStep", move |_| stepper.dispatch(StepAction::Previous));
        bindings.bind("scrollToSection", move |id| {
            if let Some(id) = id.as_string() {
                navigate_to_section(&BrowserViewport, &id);
            }
        });

        bindings
    }

    fn bind(&mut self, name: &'static str, handler: impl Fn(JsValue) + 'static) {
        let entry: Entry = Closure::wrap(Box::new(handler) as Box<dyn Fn(JsValue)>);
        if let Err(e) = Reflect::set(&self.window, &JsValue::from_str(name), entry.as_ref()) {
            error!("Could not expose window.{}: {:?}", name, e);
            return;
        }
        self.entries.push((name, entry));
    }
}

impl Drop for GlobalBindings {
    fn drop(&mut self) {
        for (name, _) in &self.entries {
            let _ = Reflect::delete_property(&self.window, &JsValue::from_str(name));
        }
    }
}

/// Routes clicks on `<a href="#section">` through smooth section scrolling
/// instead of the browser's jump.
pub fn anchor_click_handler() -> Closure<dyn Fn(MouseEvent)> {
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let href = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
            .and_then(|link| link.get_attribute("href"));
        if let Some(section) = href.as_deref().and_then(anchor_target) {
            event.prevent_default();
            navigate_to_section(&BrowserViewport, section);
        }
    }) as Box<dyn Fn(MouseEvent)>)
}

/// Logs anything that escapes to `window.onerror`. There is no recovery.
pub fn install_error_logger(window: &Window) {
    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        error!(
            "Uncaught error: {} ({}:{}:{})",
            event.message(),
            event.filename(),
            event.lineno(),
            event.colno()
        );
    }) as Box<dyn Fn(ErrorEvent)>);
    match window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
        Ok(()) => on_error.forget(),
        Err(e) => warn!("Could not install error logger: {:?}", e),
    }
}

pub fn register_service_worker(window: &Window) {
    let container = window.navigator().service_worker();
    let registration = container.register(SERVICE_WORKER_PATH);
    spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => info!("SW registered: {}", SERVICE_WORKER_PATH),
            Err(e) => warn!("SW registration failed: {:?}", e),
        }
    });
}
