//! Console shell: owns the two request lifecycles and the render snapshot.
//!
//! # Design
//! - Probe gateway health exactly once at mount; never re-poll.
//! - Keep the issuance trigger disabled while a request is outstanding.
//! - The two lifecycles are independent; both may be in flight at once.

use crate::app::api::ApiCtx;
use crate::components::health::HealthLine;
use crate::components::issuance::IssuePanel;
use crate::models::demo_issue_request;
use crate::state::{HealthState, IssuanceState};
use gloo::console;
use yew::prelude::*;

mod api;
mod preferences;

#[function_component(AdminApp)]
pub(crate) fn admin_app() -> Html {
    let health = use_state(|| HealthState::Pending);
    let issuance = use_state(|| IssuanceState::Idle);
    let api_ctx = use_memo(|_| ApiCtx::new(preferences::api_base_url()), ());

    {
        let health = health.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    let outcome = client.fetch_health().await;
                    if let Err(err) = &outcome {
                        console::error!("health probe failed", err.to_string());
                    }
                    // A set after teardown is a no-op, so a probe left
                    // pending cannot fault the console.
                    health.set(HealthState::settle(outcome));
                });
                || ()
            },
            (),
        );
    }

    let on_issue = {
        let issuance = issuance.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |()| {
            let Some(next) = issuance.begin() else {
                return;
            };
            issuance.set(next);
            let issuance = issuance.clone();
            let client = api_ctx.client.clone();
            yew::platform::spawn_local(async move {
                let outcome = client.issue_card(&demo_issue_request()).await;
                if let Err(err) = &outcome {
                    console::error!("card issuance failed", err.to_string());
                }
                issuance.set(IssuanceState::settle(outcome));
            });
        })
    };

    html! {
        <main class="console">
            <h1>{"Fintech Admin"}</h1>
            <HealthLine state={(*health).clone()} />
            <IssuePanel state={(*issuance).clone()} {on_issue} />
        </main>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AdminApp>::with_root(root).render();
    } else {
        yew::Renderer::<AdminApp>::new().render();
    }
}
