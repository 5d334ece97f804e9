//! Viewport guard that blocks wide screens for mobile-only roles.
//!
//! # Design
//! - [`LayoutGate`] is a pure view over `(role, oversized)` so it renders in native tests.
//! - The resize listener is owned by the hook and dropped when the guard unmounts.

use crate::components::screen_warning::ScreenSizeWarning;
use crate::core::layout::{LayoutDecision, MAX_STUDENT_WIDTH, UserRole, decide_layout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutGateProps {
    pub(crate) role: UserRole,
    pub(crate) oversized: bool,
    pub(crate) children: Children,
}

#[function_component(LayoutGate)]
pub(crate) fn layout_gate(props: &LayoutGateProps) -> Html {
    match decide_layout(props.role, props.oversized) {
        LayoutDecision::Application => html! { <>{for props.children.iter()}</> },
        LayoutDecision::ScreenSizeWarning => {
            html! { <ScreenSizeWarning max_width={MAX_STUDENT_WIDTH} /> }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use guard::LayoutGuard;

#[cfg(target_arch = "wasm32")]
mod guard {
    use super::LayoutGate;
    use crate::core::layout::{MAX_STUDENT_WIDTH, UserRole, is_oversized};
    use gloo::events::EventListener;
    use gloo::utils::window;
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub(crate) struct LayoutGuardProps {
        pub(crate) role: UserRole,
        pub(crate) children: Children,
    }

    #[function_component(LayoutGuard)]
    pub(crate) fn layout_guard(props: &LayoutGuardProps) -> Html {
        let oversized = use_viewport_oversized(MAX_STUDENT_WIDTH);
        html! {
            <LayoutGate role={props.role} {oversized}>
                {for props.children.iter()}
            </LayoutGate>
        }
    }

    /// Track whether the window is wider than `max_width`.
    #[hook]
    fn use_viewport_oversized(max_width: u32) -> bool {
        let oversized = use_state_eq(|| is_oversized(current_width(), max_width));
        {
            let oversized = oversized.clone();
            use_effect_with(max_width, move |max_width| {
                let max_width = *max_width;
                oversized.set(is_oversized(current_width(), max_width));
                let listener = EventListener::new(&window(), "resize", move |_event| {
                    oversized.set(is_oversized(current_width(), max_width));
                });
                move || drop(listener)
            });
        }
        *oversized
    }

    fn current_width() -> f64 {
        window()
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(role: UserRole, oversized: bool) -> String {
        ServerRenderer::<LayoutGate>::with_props(move || LayoutGateProps {
            role,
            oversized,
            children: Children::new(vec![html! { <p>{"app body"}</p> }]),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn oversized_student_sees_only_the_warning() {
        let html = render(UserRole::Student, true).await;
        assert!(html.contains("Mobile View Required"));
        assert!(!html.contains("app body"));
    }

    #[tokio::test]
    async fn phone_sized_student_sees_the_app() {
        let html = render(UserRole::Student, false).await;
        assert!(html.contains("app body"));
        assert!(!html.contains("Mobile View Required"));
    }

    #[tokio::test]
    async fn wide_screen_is_allowed_for_teachers() {
        let html = render(UserRole::Teacher, true).await;
        assert!(html.contains("app body"));
    }
}
