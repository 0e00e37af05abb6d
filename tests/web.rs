//! Browser-only tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use domain_insights::clean_domain;
use domain_insights::throttle::{BrowserSleeper, FixedIntervalGate, RequestGate, Sleeper};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn clean_domain_trims_and_normalizes() {
    assert_eq!(clean_domain("  https://example.com/ "), "example.com");
    assert_eq!(clean_domain("https://"), "");
}

#[wasm_bindgen_test]
async fn browser_sleeper_waits_at_least_the_interval() {
    let start = now_ms();
    BrowserSleeper.sleep(Duration::from_millis(50)).await;
    assert!(now_ms() - start >= 45.0);
}

#[wasm_bindgen_test]
async fn fixed_interval_gate_uses_browser_timer() {
    let gate = FixedIntervalGate::new(Duration::from_millis(10), BrowserSleeper);
    gate.after_request().await;
    assert_eq!(gate.interval(), Duration::from_millis(10));
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}
