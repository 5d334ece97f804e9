use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
}

#[function_component(PageShell)]
pub(crate) fn page_shell(props: &ShellProps) -> Html {
    html! {
        <div class="container mx-auto py-8">
            <header class="mb-8 text-center">
                <h1 class="text-3xl font-bold">{"ScribeX"}</h1>
                <p class="text-gray-600">{"AI-Powered Writing Education Platform"}</p>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(NotFoundPanel)]
pub(crate) fn not_found_panel() -> Html {
    use crate::app::Route;
    use yew_router::prelude::Link;

    html! {
        <div class="p-6 max-w-md mx-auto text-center">
            <h2 class="text-xl font-bold mb-4">{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes="link">{"Back to ScribeX"}</Link<Route>>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn shell_wraps_children_under_the_brand_header() {
        let html = ServerRenderer::<PageShell>::with_props(|| ShellProps {
            children: Children::new(vec![html! { <p>{"body"}</p> }]),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains("ScribeX"));
        assert!(html.contains("AI-Powered Writing Education Platform"));
        let header_at = html.find("<header").unwrap_or(usize::MAX);
        let body_at = html.find("<p>body</p>").unwrap_or(0);
        assert!(header_at < body_at);
    }
}
