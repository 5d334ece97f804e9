//! Application root: configuration, layout guard, and routing.

use crate::components::health_check::HealthCheckWidget;
use crate::components::layout_guard::LayoutGuard;
use crate::components::shell::{NotFoundPanel, PageShell};
use crate::config::UiConfig;
use crate::core::layout::UserRole;
use api::ApiCtx;
use gloo::console;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod routes;

#[derive(Properties, PartialEq)]
struct ScribexAppProps {
    config: UiConfig,
}

#[function_component(ScribexApp)]
fn scribex_app(props: &ScribexAppProps) -> Html {
    let api_ctx = {
        let config = props.config.clone();
        use_memo((), move |_| ApiCtx::new(&config))
    };
    let role: UserRole = props.config.role;

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <LayoutGuard {role}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </LayoutGuard>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <PageShell>
                <HealthCheckWidget />
            </PageShell>
        },
        Route::NotFound => html! {
            <PageShell>
                <NotFoundPanel />
            </PageShell>
        },
    }
}

fn load_config() -> UiConfig {
    UiConfig::from_build_env().unwrap_or_else(|err| {
        console::error!("invalid build configuration, using defaults", format!("{err:?}"));
        UiConfig::default()
    })
}

/// Mount the application on `#root`, or on `<body>` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    console::log!(
        "ScribeX UI starting",
        config.api_base_url.clone(),
        config.role.as_str()
    );
    let props = ScribexAppProps { config };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ScribexApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<ScribexApp>::with_props(props).render();
    }
}
