use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router_macro::path;
use swap_core::{TokenMap, CHAIN_ID, TOKEN_MAP};
use tracing::{debug, info};

mod routes;

use routes::{nav::Nav, trade::Trade};

pub const BASE_URL: &str = "/swap-price-leptos";

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(TokenMap::new(TOKEN_MAP.clone()));

    let token_map = use_context::<TokenMap>().expect("tokens context missing!");

    debug!("chain id: {CHAIN_ID}");
    debug!("{} known tokens", token_map.len());
    debug!(
        "{:#?}",
        token_map
            .iter()
            .map(|(_, token)| token.symbol.clone())
            .collect::<Vec<String>>()
    );

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text="Swap" />
        <Router>
            <header class="bg-background z-40">
                <div class="p-4 flex justify-between items-center border-b">
                    <div class="flex flex-row items-center gap-4">
                        <Nav />
                    </div>
                    <p class="text-sm text-muted-foreground leading-none px-4 py-1.5 border border-solid border-muted-foreground rounded-sm">
                        {CHAIN_ID}
                    </p>
                </div>
            </header>
            <main class="flex-1 px-2.5 lg:px-8 py-3 overflow-x-auto">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route
                        path=path!("swap-price-leptos")
                        view=|| view! { <Redirect path="/swap-price-leptos/trade" /> }
                    />
                    <Route path=path!("/swap-price-leptos/trade") view=Trade />
                </Routes>
            </main>
        </Router>
    }
}
