use crate::Price;
use leptos::{ev, html, prelude::*};
use lucide_leptos::ChevronDown;
use swap_core::format::{format_currency_amount, NumberType};
use swap_sdk_core::{CurrencyAmount, Trade};
use tracing::info;

#[component]
pub fn SwapDetails(
    #[prop(into)] trade: Signal<Trade>,
    #[prop(into)] output_usdc: Signal<Option<CurrencyAmount>>,
    /// Slippage tolerance in basis points.
    #[prop(into)]
    slippage: Signal<u16>,
) -> impl IntoView {
    info!("rendering <SwapDetails/>");

    on_cleanup(move || {
        info!("cleaning up <SwapDetails/>");
    });

    let (expanded, set_expanded) = signal(false);

    let content_ref = NodeRef::<html::Div>::new();

    let toggle_expand = move |_: ev::MouseEvent| {
        if let Some(content) = content_ref.get() {
            let full_height = content.scroll_height();

            if expanded.get() {
                // Ensure the content has an explicit height before collapsing
                content.style(("height", format!("{}px", full_height)));
                request_animation_frame(move || {
                    content.style(("height", "0px"));
                });
            } else {
                // First, set the height explicitly (this fixes the first animation issue)
                content.style(("height", "0px"));
                request_animation_frame(move || {
                    content.style(("height", format!("{}px", full_height)));
                });

                // Reset height to `auto` after transition ends to allow dynamic resizing
                window_event_listener_untyped("transitionend", move |_| {
                    if expanded.get_untracked() {
                        if let Some(content) = content_ref.get_untracked() {
                            content.style(("height", "auto"));
                        }
                    }
                });
            }
        }
        set_expanded.update(|e| *e = !*e);
    };

    let amount_out = move || {
        trade.with(|trade| {
            let amount = trade.output_amount();
            format!(
                "{} {}",
                format_currency_amount(Some(amount), NumberType::TokenTx),
                amount.token().symbol
            )
        })
    };

    let amount_out_min = move || {
        trade.with(|trade| {
            let amount = trade.minimum_amount_out(slippage.get());
            format!(
                "{} {}",
                format_currency_amount(Some(&amount), NumberType::TokenTx),
                amount.token().symbol
            )
        })
    };

    let output_value = move || {
        output_usdc
            .get()
            .map(|usdc| format_currency_amount(Some(&usdc), NumberType::FiatTokenPrice))
    };

    view! {
        <div class="flex flex-col w-full rounded-md box-border border border-solid border-border">
            // Header (Click to Toggle)
            <div
                class="min-h-[40px] px-4 flex items-center justify-between cursor-pointer"
                on:click=toggle_expand
            >
                // Clicking the price only flips its base; it never reaches toggle_expand.
                <Price trade output_usdc />
                <div
                    class="flex items-center justify-center transition-transform"
                    class=("rotate-180", move || expanded.get())
                >
                    <ChevronDown size=20 />
                </div>
            </div>

            // Expandable Content
            <div
                node_ref=content_ref
                class="transition-all ease-standard box-border overflow-hidden"
                class=(["opacity-0", "invisible", "h-0"], move || !expanded.get())
                class=(["opacity-100", "visible"], move || expanded.get())
            >
                <div class="w-full box-border p-4 pt-2 flex flex-col gap-2 items-center">
                    <div class="w-full flex flex-row justify-between text-sm">
                        <p class="m-0 text-muted-foreground">"Expected Output:"</p>
                        <p class="m-0 text-foreground font-semibold">{amount_out}</p>
                    </div>
                    <div class="w-full flex flex-row justify-between text-sm">
                        <p class="m-0 text-muted-foreground">"Minimum Received:"</p>
                        <p class="m-0 text-foreground font-semibold">{amount_out_min}</p>
                    </div>
                    <Show when=move || output_usdc.get().is_some()>
                        <div class="w-full flex flex-row justify-between text-sm">
                            <p class="m-0 text-muted-foreground">"Output Value:"</p>
                            <p class="m-0 text-foreground font-semibold">{output_value}</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
