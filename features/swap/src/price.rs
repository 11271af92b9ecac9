use leptos::{ev, prelude::*};
use swap_core::format::{format_currency_amount, format_price, NumberType};
use swap_sdk_core::{CurrencyAmount, Fraction, Trade};
use tracing::{debug, info, warn};

/// Which side of the trade anchors the displayed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// `1 <input> = x <output>`
    #[default]
    Input,
    /// `1 <output> = x <input>`
    Output,
}

impl Base {
    /// Maps the `<Price/>` toggle to a base. `false` (the initial state) shows the output side.
    pub fn from_default_base(default_base: bool) -> Self {
        if default_base {
            Base::Input
        } else {
            Base::Output
        }
    }
}

/// Returns the exchange rate of `trade` as `1 <base> = x <quote>`, and the USDC price of one
/// unit of the base token when `output_usdc` (the USDC value of the trade's output) is known.
pub fn trade_exchange_rate(
    trade: &Trade,
    output_usdc: Option<&CurrencyAmount>,
    base: Base,
) -> (String, Option<String>) {
    let (price, base_amount) = match base {
        Base::Input => (trade.execution_price().clone(), trade.input_amount()),
        Base::Output => (trade.execution_price().invert(), trade.output_amount()),
    };

    // Rescale the total USDC value to one unit of the base token, so it lines up with the rate.
    let usdc_price = output_usdc.and_then(|usdc| {
        usdc.multiply(&Fraction::from_integer(base_amount.decimal_scale()))
            .divide(base_amount.as_fraction())
            .inspect_err(|error| warn!("could not derive usdc price: {error}"))
            .ok()
    });

    let exchange_rate = format!(
        "1 {} = {} {}",
        price.base_currency().symbol,
        format_price(Some(&price.to_significant(6)), NumberType::TokenTx),
        price.quote_currency().symbol,
    );
    let usdc_price = usdc_price
        .map(|usdc_price| format_currency_amount(Some(&usdc_price), NumberType::FiatTokenPrice));

    (exchange_rate, usdc_price)
}

/// Reactive form of [`trade_exchange_rate`]. Only recomputes when one of the inputs changes.
pub fn use_trade_exchange_rate(
    trade: Signal<Trade>,
    output_usdc: Signal<Option<CurrencyAmount>>,
    base: Signal<Base>,
) -> (Memo<String>, Memo<Option<String>>) {
    let derived = Memo::new(move |_| {
        let base = base.get();
        let output_usdc = output_usdc.get();
        trade.with(|trade| trade_exchange_rate(trade, output_usdc.as_ref(), base))
    });

    let exchange_rate = Memo::new(move |_| derived.with(|(exchange_rate, _)| exchange_rate.clone()));
    let usdc_price = Memo::new(move |_| derived.with(|(_, usdc_price)| usdc_price.clone()));

    (exchange_rate, usdc_price)
}

/// Flips which side of the trade is the base. The click must not reach the details header, which
/// would expand or collapse the card.
fn toggle_base(default_base: RwSignal<bool>, stop_propagation: impl FnOnce()) {
    default_base.update(|default_base| *default_base = !*default_base);
    stop_propagation();
}

/// Displays the price of a trade. If `output_usdc` is given, also displays the unit price.
///
/// Clicking flips which side of the trade is the base. The click does not reach any parent
/// handler.
#[component]
pub fn Price(
    #[prop(into)] trade: Signal<Trade>,
    #[prop(into, optional)] output_usdc: MaybeProp<CurrencyAmount>,
) -> impl IntoView {
    info!("rendering <Price/>");

    on_cleanup(move || {
        info!("cleaning up <Price/>");
    });

    let default_base = RwSignal::new(false);

    let base = Signal::derive(move || Base::from_default_base(default_base.get()));
    let output_usdc = Signal::derive(move || output_usdc.get());

    let (exchange_rate, usdc_price) = use_trade_exchange_rate(trade, output_usdc, base);

    Effect::new(move || debug!("{} ({:?})", exchange_rate.get(), usdc_price.get()));

    let on_click = move |ev: ev::MouseEvent| toggle_base(default_base, || ev.stop_propagation());

    view! {
        <button
            type="button"
            class="p-0 m-0 bg-transparent border-none cursor-pointer text-primary hover:brightness-90"
            on:click=on_click
        >
            <p class="m-0 text-sm font-semibold">
                <span class="flex flex-row items-center gap-1">
                    {move || exchange_rate.get()}
                    {move || {
                        usdc_price
                            .get()
                            .map(|usdc_price| {
                                view! {
                                    <span class="text-muted-foreground">"("{usdc_price}")"</span>
                                }
                            })
                    }}
                </span>
            </p>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_sdk_core::{Token, TradeType};

    fn eth() -> Token {
        Token::new("secret1eth", 18, "ETH", "Ether")
    }

    fn usdc() -> Token {
        Token::new("secret1usdc", 6, "USDC", "USD Coin")
    }

    fn trade(input: (Token, u128), output: (Token, u128)) -> Trade {
        Trade::new(
            CurrencyAmount::from_raw_amount(input.0, input.1),
            CurrencyAmount::from_raw_amount(output.0, output.1),
            TradeType::ExactInput,
        )
        .unwrap()
    }

    fn one_eth_for_2000_usdc() -> Trade {
        trade((eth(), 10u128.pow(18)), (usdc(), 2_000_000_000))
    }

    fn usdc_amount(whole: u128) -> CurrencyAmount {
        CurrencyAmount::from_raw_amount(usdc(), whole * 1_000_000)
    }

    fn rate_value(exchange_rate: &str) -> f64 {
        exchange_rate
            .split(' ')
            .nth(3)
            .and_then(|value| value.replace(',', "").parse().ok())
            .unwrap()
    }

    #[test]
    fn default_base_maps_to_output() {
        assert_eq!(Base::default(), Base::Input);
        assert_eq!(Base::from_default_base(false), Base::Output);
        assert_eq!(Base::from_default_base(true), Base::Input);
    }

    #[test]
    fn input_base_reads_input_to_output() {
        let (exchange_rate, usdc_price) =
            trade_exchange_rate(&one_eth_for_2000_usdc(), None, Base::Input);
        assert!(exchange_rate.starts_with("1 ETH ="));
        assert!(exchange_rate.ends_with("USDC"));
        assert_eq!(exchange_rate, "1 ETH = 2000 USDC");
        assert_eq!(usdc_price, None);
    }

    #[test]
    fn output_base_is_the_inverse() {
        let trade = trade((eth(), 15 * 10u128.pow(17)), (usdc(), 3_123_450_000));

        let (input_rate, _) = trade_exchange_rate(&trade, None, Base::Input);
        let (output_rate, usdc_price) = trade_exchange_rate(&trade, None, Base::Output);

        assert!(output_rate.starts_with("1 USDC ="));
        assert!(output_rate.ends_with("ETH"));
        assert_eq!(usdc_price, None);

        let product = rate_value(&input_rate) * rate_value(&output_rate);
        assert!((product - 1.0).abs() < 0.01, "{input_rate} * {output_rate} = {product}");
    }

    #[test]
    fn usdc_price_is_per_unit_of_base() {
        let output_usdc = usdc_amount(2000);

        let (_, single) =
            trade_exchange_rate(&one_eth_for_2000_usdc(), Some(&output_usdc), Base::Input);
        assert_eq!(single.as_deref(), Some("$2,000.00"));

        // twice the input for the same value halves the unit price
        let doubled = trade((eth(), 2 * 10u128.pow(18)), (usdc(), 2_000_000_000));
        let (_, halved) = trade_exchange_rate(&doubled, Some(&output_usdc), Base::Input);
        assert_eq!(halved.as_deref(), Some("$1,000.00"));

        let (_, per_usdc) =
            trade_exchange_rate(&one_eth_for_2000_usdc(), Some(&output_usdc), Base::Output);
        assert_eq!(per_usdc.as_deref(), Some("$1.00"));
    }

    #[test]
    fn toggling_alternates_between_both_forms() {
        let trade = one_eth_for_2000_usdc();
        let output_usdc = usdc_amount(2000);

        let mut default_base = false;
        let mut rendered = Vec::new();
        for _ in 0..4 {
            let (exchange_rate, usdc_price) = trade_exchange_rate(
                &trade,
                Some(&output_usdc),
                Base::from_default_base(default_base),
            );
            rendered.push((exchange_rate, usdc_price));
            default_base = !default_base;
        }

        assert_eq!(rendered[0].0, "1 USDC = 0.0005 ETH");
        assert_eq!(rendered[1].0, "1 ETH = 2000 USDC");
        assert!(rendered[1].1.as_deref().unwrap().contains("2,000.00"));
        assert_eq!(rendered[0], rendered[2]);
        assert_eq!(rendered[1], rendered[3]);
    }

    #[test]
    fn clicks_alternate_the_rendered_rate() {
        let owner = Owner::new();
        owner.set();

        let default_base = RwSignal::new(false);
        let (exchange_rate, usdc_price) = use_trade_exchange_rate(
            Signal::stored(one_eth_for_2000_usdc()),
            Signal::stored(Some(usdc_amount(2000))),
            Signal::derive(move || Base::from_default_base(default_base.get())),
        );

        let mut stopped = 0;
        let mut rendered = vec![(exchange_rate.get_untracked(), usdc_price.get_untracked())];
        for _ in 0..3 {
            toggle_base(default_base, || stopped += 1);
            rendered.push((exchange_rate.get_untracked(), usdc_price.get_untracked()));
        }

        // every click is kept away from the parent
        assert_eq!(stopped, 3);
        assert_eq!(rendered[0].0, "1 USDC = 0.0005 ETH");
        assert_eq!(rendered[1].0, "1 ETH = 2000 USDC");
        assert_eq!(rendered[1].1.as_deref(), Some("$2,000.00"));
        assert_eq!(rendered[0], rendered[2]);
        assert_eq!(rendered[1], rendered[3]);
    }

    #[test]
    fn hook_follows_the_base_signal() {
        let owner = Owner::new();
        owner.set();

        let trade = RwSignal::new(one_eth_for_2000_usdc());
        let output_usdc = RwSignal::new(Some(usdc_amount(2000)));
        let default_base = RwSignal::new(false);

        let (exchange_rate, usdc_price) = use_trade_exchange_rate(
            trade.into(),
            output_usdc.into(),
            Signal::derive(move || Base::from_default_base(default_base.get())),
        );

        assert_eq!(exchange_rate.get_untracked(), "1 USDC = 0.0005 ETH");
        assert_eq!(usdc_price.get_untracked().as_deref(), Some("$1.00"));

        default_base.set(true);
        assert_eq!(exchange_rate.get_untracked(), "1 ETH = 2000 USDC");
        assert_eq!(usdc_price.get_untracked().as_deref(), Some("$2,000.00"));

        output_usdc.set(None);
        assert_eq!(usdc_price.get_untracked(), None);
    }
}
