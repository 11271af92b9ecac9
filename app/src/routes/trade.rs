use leptos::prelude::*;
use swap_feature::Swap;
use tracing::info;

#[component]
pub fn Trade() -> impl IntoView {
    info!("rendering <Trade/>");

    on_cleanup(move || {
        info!("cleaning up <Trade/>");
    });

    view! { <Swap /> }
}
