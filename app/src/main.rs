use swap_price_leptos::App;
use leptos::prelude::*;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(
            // To avoid trace events in the browser from showing their JS backtrace
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        .with_max_level(tracing::Level::DEBUG)
        // For some reason, if we don't do this in the browser, we get a runtime error.
        .without_time()
        .with_ansi(false)
        .init();

    console_error_panic_hook::set_once();

    mount_to_body(App)
}
