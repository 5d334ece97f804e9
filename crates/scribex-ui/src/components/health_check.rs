//! API connection check widget.
//!
//! # Design
//! - [`HealthCheckPanel`] renders a [`HealthCheck`] and reports clicks; it owns no state.
//! - The wasm widget owns the state and drives it with `run_health_check`.
//! - The button is disabled while loading; responses still land in arrival order.

use crate::core::health::{HealthCheck, status_tone};
use yew::prelude::*;

pub(crate) const TITLE: &str = "API Connection Test";
pub(crate) const IDLE_LABEL: &str = "Test API Connection";
pub(crate) const LOADING_LABEL: &str = "Testing...";
pub(crate) const ERROR_HEADING: &str = "Error:";
pub(crate) const RESPONSE_HEADING: &str = "API Response:";

#[derive(Properties, PartialEq)]
pub(crate) struct HealthCheckPanelProps {
    pub(crate) state: HealthCheck,
    pub(crate) on_test: Callback<()>,
}

#[function_component(HealthCheckPanel)]
pub(crate) fn health_check_panel(props: &HealthCheckPanelProps) -> Html {
    let loading = props.state.is_loading();
    let onclick = {
        let on_test = props.on_test.clone();
        Callback::from(move |_: MouseEvent| on_test.emit(()))
    };

    html! {
        <div class="p-6 max-w-md mx-auto bg-white rounded-xl shadow-md">
            <h2 class="text-xl font-bold mb-4">{TITLE}</h2>
            <button type="button" class="btn btn-primary mb-4" disabled={loading} {onclick}>
                {if loading { LOADING_LABEL } else { IDLE_LABEL }}
            </button>
            {render_error(props.state.error_text())}
            {render_response(&props.state)}
        </div>
    }
}

fn render_error(message: Option<&str>) -> Html {
    let Some(message) = message else {
        return html! {};
    };
    html! {
        <div class="p-3 bg-red-100 text-red-700 rounded mb-4" role="alert">
            <p class="font-bold">{ERROR_HEADING}</p>
            <p>{message.to_string()}</p>
        </div>
    }
}

fn render_response(state: &HealthCheck) -> Html {
    let Some(text) = state.payload_text() else {
        return html! {};
    };
    let badge = state
        .summary()
        .and_then(|summary| summary.status)
        .map(|status| {
            html! {
                <span class={classes!("pill", status_tone(&status))}>{status.clone()}</span>
            }
        });
    html! {
        <div class="p-3 bg-green-100 text-green-700 rounded">
            <p class="font-bold">{RESPONSE_HEADING}</p>
            {for badge}
            <pre class="mt-2 whitespace-pre-wrap">{text}</pre>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use widget::HealthCheckWidget;

#[cfg(target_arch = "wasm32")]
mod widget {
    use super::HealthCheckPanel;
    use crate::app::api::ApiCtx;
    use crate::core::health::{HealthCheck, run_health_check};
    use gloo::console;
    use yew::prelude::*;

    #[function_component(HealthCheckWidget)]
    pub(crate) fn health_check_widget() -> Html {
        let api_ctx = use_context::<ApiCtx>();
        let state = use_state(|| HealthCheck::Idle);
        let on_test = {
            let state = state.clone();
            Callback::from(move |()| {
                let Some(api_ctx) = api_ctx.clone() else {
                    console::error!("API client context missing");
                    return;
                };
                let state = state.clone();
                yew::platform::spawn_local(async move {
                    run_health_check(api_ctx.client.as_ref(), |next| state.set(next)).await;
                });
            })
        };

        html! { <HealthCheckPanel state={(*state).clone()} {on_test} /> }
    }
}
