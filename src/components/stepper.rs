use yew::prelude::*;

use zelion_site::state::stepper::{StepAction, StepStatus, StepperState, LAST_STEP, STEP_COUNT};

const STEP_TITLES: [&str; STEP_COUNT] = ["Pick your kit", "Claim an offer", "Ready for match day"];

#[derive(Properties, PartialEq)]
pub struct StepperProps {
    pub state: UseReducerHandle<StepperState>,
}

fn step_circle(index: usize, status: StepStatus) -> Html {
    html! {
        <div class={classes!("step-circle", status.class())}>
            {
                if status == StepStatus::Completed {
                    html! { <i class="fas fa-check"></i> }
                } else {
                    html! { { (index + 1).to_string() } }
                }
            }
        </div>
    }
}

#[function_component(Stepper)]
pub fn stepper(props: &StepperProps) -> Html {
    let state = props.state.clone();

    let go = |action: StepAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(action))
    };

    html! {
        <section id="how-it-works" class="stepper">
            <h2>{"How it works"}</h2>
            <ol class="steps">
                { for STEP_TITLES.iter().enumerate().map(|(index, title)| {
                    let status = state.status_of(index);
                    html! {
                        <li class="step">
                            { step_circle(index, status) }
                            <span class={classes!("step-title", status.class())}>{ *title }</span>
                            {
                                if index < LAST_STEP {
                                    html! {
                                        <div class={classes!("step-connector", state.connector_completed(index).then_some("completed"))}>
                                            <div
                                                class="connector-progress"
                                                style={format!("height: {};", state.connector_progress(index))}
                                            />
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </li>
                    }
                }) }
            </ol>
            <div class="step-controls">
                <button class="step-back" disabled={state.current == 0} onclick={go(StepAction::Previous)}>
                    {"Back"}
                </button>
                <button class="step-next" disabled={state.current == LAST_STEP} onclick={go(StepAction::Next)}>
                    {"Next"}
                </button>
            </div>
        </section>
    }
}
