#![cfg(target_arch = "wasm32")]

use leptos::{mount::mount_to, prelude::*, task::tick};
use swap_feature::Price;
use swap_sdk_core::{CurrencyAmount, Token, Trade, TradeType};
use wasm_bindgen_test::*;
use web_sys::{wasm_bindgen::JsCast, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn one_eth_for_2000_usdc() -> Trade {
    let eth = Token::new("secret1eth", 18, "ETH", "Ether");
    let usdc = Token::new("secret1usdc", 6, "USDC", "USD Coin");

    Trade::new(
        CurrencyAmount::from_raw_amount(eth, 10u128.pow(18)),
        CurrencyAmount::from_raw_amount(usdc, 2_000_000_000u128),
        TradeType::ExactInput,
    )
    .unwrap()
}

#[wasm_bindgen_test]
async fn clicking_the_price_flips_the_base_without_reaching_the_parent() {
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();

    let parent_clicks = RwSignal::new(0);

    let _handle = mount_to(container.clone(), move || {
        view! {
            <div on:click=move |_| parent_clicks.update(|clicks| *clicks += 1)>
                <Price trade=Signal::stored(one_eth_for_2000_usdc()) />
            </div>
        }
    });

    let button = container
        .query_selector("button")
        .unwrap()
        .unwrap()
        .unchecked_into::<HtmlElement>();
    let text = || button.text_content().unwrap_or_default();

    assert_eq!(text(), "1 USDC = 0.0005 ETH");

    button.click();
    tick().await;
    assert_eq!(text(), "1 ETH = 2000 USDC");

    button.click();
    tick().await;
    assert_eq!(text(), "1 USDC = 0.0005 ETH");

    assert_eq!(parent_clicks.get_untracked(), 0);
}
