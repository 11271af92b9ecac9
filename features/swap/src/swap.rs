use crate::{
    quoter::{quote_exact_input, Quote, REFERENCE_PRICES},
    SwapDetails,
};
use leptos::{html, prelude::*};
use leptos_router::{hooks::query_signal_with_options, NavigateOptions};
use lucide_leptos::ArrowDownUp;
use swap_core::{
    utils::{display_token_amount, parse_token_amount},
    Error, TokenMap, SYMBOL_TO_ADDR, USD_STABLECOIN,
};
use swap_sdk_core::{CurrencyAmount, Token, Trade};
use tracing::{debug, error, info};

/// Slippage tolerance in basis points. smallest supported slippage = 0.01%
pub const DEFAULT_SLIPPAGE: u16 = 50;

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let token_map = use_context::<TokenMap>().expect("tokens context missing!");

    // prevents scrolling to the top of the page each time a query param changes
    let nav_options = NavigateOptions {
        scroll: false,
        ..Default::default()
    };

    let (token_x, set_token_x) = query_signal_with_options::<String>("from", nav_options.clone());
    let (token_y, set_token_y) = query_signal_with_options::<String>("to", nav_options.clone());

    let (amount_x, set_amount_x) = signal(String::default());
    let (amount_y, set_amount_y) = signal(String::default());

    let slippage = Signal::stored(DEFAULT_SLIPPAGE);

    let mut tokens: Vec<Token> = token_map.values().cloned().collect();
    tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    let token_options = move || {
        tokens
            .iter()
            .map(|token| {
                view! { <option value=token.address.clone()>{token.display_symbol().to_string()}</option> }
            })
            .collect_view()
    };
    let token_options_y = token_options.clone();

    let select_x_node_ref = NodeRef::<html::Select>::new();
    let select_y_node_ref = NodeRef::<html::Select>::new();

    Effect::new(move || {
        if let Some(token_x) = token_x.get() {
            if let Some(select_x) = select_x_node_ref.get() {
                select_x.set_value(&token_x)
            }
        }
    });
    Effect::new(move || {
        if let Some(token_y) = token_y.get() {
            if let Some(select_y) = select_y_node_ref.get() {
                select_y.set_value(&token_y)
            }
        }
    });

    let quote_token_map = token_map.clone();
    let get_quote: Action<(String, String, String), Result<Quote, Error>> = Action::new(
        move |(token_x, token_y, amount_in): &(String, String, String)| {
            let token_map = quote_token_map.clone();
            let token_x = token_x.to_owned();
            let token_y = token_y.to_owned();
            let amount_in = amount_in.to_owned();

            async move {
                let Some(token_x) = token_map.get(&token_x) else {
                    return Err(Error::UnknownToken);
                };
                let Some(token_y) = token_map.get(&token_y) else {
                    return Err(Error::UnknownToken);
                };

                let amount_in = parse_token_amount(amount_in, token_x.decimals)?;
                let usd_token = SYMBOL_TO_ADDR
                    .get(USD_STABLECOIN)
                    .and_then(|address| token_map.get(address));

                quote_exact_input(token_x, token_y, amount_in, usd_token, &REFERENCE_PRICES)
                    .inspect_err(|error| error!("{error}"))
            }
        },
    );

    let handle_quote = move |_| {
        let (Some(token_x), Some(token_y)) = (token_x.get(), token_y.get()) else {
            return;
        };
        _ = get_quote.dispatch((token_x, token_y, amount_x.get()))
    };

    let quote = Memo::new(move |_| get_quote.value().get().and_then(Result::ok));

    // Updates the amount_y input whenever the quote changes
    Effect::new(move || {
        if let Some(quote) = quote.get() {
            let amount_out = quote.trade.output_amount();
            debug!("amount out: {}", amount_out.to_exact());
            set_amount_y.set(display_token_amount(amount_out));
        }
    });

    let quote_error = move || {
        get_quote
            .value()
            .get()
            .and_then(Result::err)
            .map(|error| error.to_string())
    };

    view! {
        <div class="absolute inset-0 m-auto flex items-center justify-center">
            <div class="grid gap-4 grid-cols-1 max-w-sm md:-translate-y-[54px]">
                // Main swap box
                <div class="rounded-lg shadow-sm bg-card text-card-foreground border border-solid border-border">
                    // card header
                    <div class="p-6 flex justify-between items-center">
                        <h2 class="m-0">Swap</h2>
                    </div>
                    // card body
                    <div class="px-6 pb-6 space-y-4">
                        <div class="space-y-2">
                            <label class="block text-sm font-medium" for="from-token">
                                "From"
                            </label>
                            <div class="flex justify-between gap-4 h-9">
                                <input
                                    id="from-token"
                                    type="text"
                                    pattern="^[0-9]*[.,]?[0-9]*$"
                                    inputmode="decimal"
                                    placeholder="0.0"
                                    autocomplete="off"
                                    class="px-3 py-1 w-full text-sm rounded-md font-normal"
                                    prop:value=move || amount_x.get()
                                    on:input=move |ev| {
                                        set_amount_x.set(event_target_value(&ev));
                                        set_amount_y.set("".to_string());
                                    }
                                />
                                <select
                                    node_ref=select_x_node_ref
                                    class="w-[135px] font-medium py-2 px-4 bg-card rounded-md"
                                    title="Select Token X"
                                    on:input=move |ev| {
                                        let token_x = event_target_value(&ev);
                                        set_token_x.set(None);
                                        set_token_x.set(Some(token_x));
                                    }
                                    prop:value=move || token_x.get().unwrap_or_default()
                                >
                                    <option value="" disabled selected>
                                        "Select Token"
                                    </option>
                                    {token_options}
                                </select>
                            </div>
                        </div>
                        <div class="flex items-center gap-0.5 w-full">
                            <hr class="w-full" />
                            <button
                                type="button"
                                aria-label="change swap direction"
                                class="inline-flex items-center justify-center rounded-full border-0 min-w-[1.5rem] h-6 p-0
                                hover:text-primary"
                                on:click=move |_| {
                                    let x = token_x.get();
                                    let y = token_y.get();
                                    set_token_x.set(y);
                                    set_token_y.set(x);
                                }
                            >
                                <ArrowDownUp size=15 />
                            </button>
                            <hr class="w-full" />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium" for="to-token">
                                "To"
                            </label>
                            <div class="flex justify-between gap-4 h-9">
                                <input
                                    disabled
                                    id="to-token"
                                    type="text"
                                    placeholder="0.0"
                                    autocomplete="off"
                                    class="px-3 py-1 w-full text-sm font-normal rounded-md disabled:cursor-not-allowed"
                                    prop:value=move || amount_y.get()
                                />
                                <select
                                    node_ref=select_y_node_ref
                                    title="Select Token Y"
                                    class="w-[135px] font-medium py-2 px-4 bg-card rounded-md"
                                    prop:value=move || token_y.get().unwrap_or_default()
                                    on:change=move |ev| {
                                        let token_y = event_target_value(&ev);
                                        set_token_y.set(None);
                                        set_token_y.set(Some(token_y));
                                    }
                                >
                                    <option value="" disabled selected>
                                        "Select Token"
                                    </option>
                                    {token_options_y}
                                </select>
                            </div>
                        </div>

                        <button
                            class="py-1.5 px-6 bg-secondary text-secondary-foreground rounded-md h-9"
                            disabled=move || {
                                token_x.get().is_none() || token_y.get().is_none()
                                    || amount_x.get().is_empty() || get_quote.pending().get()
                            }
                            on:click=handle_quote
                        >
                            "Estimate Swap"
                        </button>

                        {move || {
                            quote_error()
                                .map(|error| {
                                    view! { <p class="m-0 text-sm text-red-500">{error}</p> }
                                })
                        }}

                        // Swap Details
                        <Show when=move || quote.with(Option::is_some)>
                            {move || {
                                quote
                                    .get_untracked()
                                    .map(|first| {
                                        let (trade, output_usdc) = quote_signals(
                                            quote.into(),
                                            first,
                                        );
                                        view! { <SwapDetails trade output_usdc slippage /> }
                                    })
                            }}
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Signals that follow the latest quote, so a mounted `<SwapDetails/>` (and the base its
/// `<Price/>` shows) survives new estimates. `first` fills in while there is no quote.
fn quote_signals(
    quote: Signal<Option<Quote>>,
    first: Quote,
) -> (Signal<Trade>, Signal<Option<CurrencyAmount>>) {
    let trade = Signal::derive(move || {
        quote
            .with(|quote| quote.as_ref().map(|quote| quote.trade.clone()))
            .unwrap_or_else(|| first.trade.clone())
    });
    let output_usdc = Signal::derive(move || {
        quote.with(|quote| quote.as_ref().and_then(|quote| quote.output_usdc.clone()))
    });

    (trade, output_usdc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{use_trade_exchange_rate, Base};
    use std::collections::HashMap;

    fn eth() -> Token {
        Token::new("secret1eth", 18, "ETH", "Ether")
    }

    fn usdc() -> Token {
        Token::new("secret1usdc", 6, "USDC", "USD Coin")
    }

    fn sscrt() -> Token {
        Token::new("secret1sscrt", 6, "SSCRT", "Secret SCRT")
    }

    fn prices() -> HashMap<String, String> {
        [("ETH", "2000"), ("USDC", "1"), ("SSCRT", "0.25")]
            .into_iter()
            .map(|(symbol, price)| (symbol.to_string(), price.to_string()))
            .collect()
    }

    #[test]
    fn new_quotes_keep_the_chosen_base() {
        let owner = Owner::new();
        owner.set();

        let eth_usdc =
            quote_exact_input(&eth(), &usdc(), 10u128.pow(18), Some(&usdc()), &prices()).unwrap();
        let eth_sscrt =
            quote_exact_input(&eth(), &sscrt(), 2 * 10u128.pow(18), Some(&usdc()), &prices())
                .unwrap();

        let quote = RwSignal::new(Some(eth_usdc.clone()));
        let (trade, output_usdc) = quote_signals(quote.into(), eth_usdc);

        let default_base = RwSignal::new(false);
        let (exchange_rate, usdc_price) = use_trade_exchange_rate(
            trade,
            output_usdc,
            Signal::derive(move || Base::from_default_base(default_base.get())),
        );
        assert_eq!(exchange_rate.get_untracked(), "1 USDC = 0.0005 ETH");

        default_base.set(true);
        assert_eq!(exchange_rate.get_untracked(), "1 ETH = 2000 USDC");

        quote.set(Some(eth_sscrt));
        assert_eq!(exchange_rate.get_untracked(), "1 ETH = 8000 SSCRT");
        assert_eq!(usdc_price.get_untracked().as_deref(), Some("$2,000.00"));

        // the first quote fills in while there is none
        quote.set(None);
        assert_eq!(trade.get_untracked().output_amount().token(), &usdc());
        assert_eq!(output_usdc.get_untracked(), None);
    }
}
