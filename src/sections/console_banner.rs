//! A small hello for anyone who opens the dev console.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn ascii_logo() -> &'static str {
    r#"
   ___      _ __   __  _
  / _ )__ _(_) /__/ / (_)__  ___ _
 / _  / // / / / _  / / / _ \/ _ `/
/____/\_,_/_/_/\_,_/ /_/_//_/\_, /
 Code MCP                   /___/

  25,707 sections. 14 codes. 5 provinces.
"#
}

#[component]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(|| print_banner());

    view! {}
}

fn print_banner() {
    if web_sys::window().is_none() {
        return;
    }
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #06b6d4; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c[tip] pip install building-code-mcp"),
        &JsValue::from_str("color: #ffcc00;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c[json] curl /visualizer/metadata-summary.json"),
        &JsValue::from_str("color: #00ccff;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cCoordinates only. Your PDF, your content."),
        &JsValue::from_str("color: #888;"),
    );
}
