use crate::state::HealthState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HealthLineProps {
    pub state: HealthState,
}

/// Gateway health caption with the current probe label.
#[function_component(HealthLine)]
pub(crate) fn health_line(props: &HealthLineProps) -> Html {
    html! {
        <p>{"Issuer Gateway health: "}<b>{props.state.label().to_string()}</b></p>
    }
}
