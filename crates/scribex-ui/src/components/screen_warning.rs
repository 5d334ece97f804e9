use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ScreenSizeWarningProps {
    pub(crate) max_width: u32,
}

/// Full-screen blocker shown to students on viewports wider than a phone.
#[function_component(ScreenSizeWarning)]
pub(crate) fn screen_size_warning(props: &ScreenSizeWarningProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 flex min-h-screen w-full items-center justify-center bg-background p-8 text-center" role="alert">
            <div class="max-w-md space-y-4">
                <h1 class="text-2xl font-bold">{"Mobile View Required"}</h1>
                <p class="text-muted-foreground">
                    {"ScribeX is designed to be used on mobile devices for students. Please switch to a phone or tablet to continue."}
                </p>
                <div class="text-sm text-muted-foreground">
                    {format!("Recommended maximum width: {}px (portrait phone)", props.max_width)}
                </div>
            </div>
        </div>
    }
}
