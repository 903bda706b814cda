use crate::state::IssuanceState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IssuePanelProps {
    pub state: IssuanceState,
    pub on_issue: Callback<()>,
}

/// Issue trigger plus the raw response block once a request has settled.
///
/// The block is absent entirely before the first completion and replaced,
/// never appended, on later completions.
#[function_component(IssuePanel)]
pub(crate) fn issue_panel(props: &IssuePanelProps) -> Html {
    let on_click = {
        let on_issue = props.on_issue.clone();
        Callback::from(move |_| on_issue.emit(()))
    };
    let response = props.state.response().map(ToString::to_string);
    html! {
        <>
            <button onclick={on_click} disabled={props.state.in_flight()}>
                {"Issue Demo Card"}
            </button>
            {match response {
                Some(body) => html! { <pre>{body}</pre> },
                None => html! {},
            }}
        </>
    }
}
