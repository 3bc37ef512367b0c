use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use zelion_site::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use zelion_site::state::reveal::{RevealState, Visibility};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that gets `animate-in` the first time it
/// scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let visibility = Visibility {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        };
                        if visibility.is_intersecting {
                            debug!("Revealing element at ratio {:.2}", visibility.ratio);
                            observer.unobserve(&entry.target());
                        }
                        dispatcher.dispatch(visibility);
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok();
                if let (Some(observer), Some(element)) = (observer.as_ref(), node.cast::<Element>()) {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), state.class())}>
            { for props.children.iter() }
        </div>
    }
}
