use leptos::ev;
use leptos::prelude::*;

use crate::data::GITHUB_URL;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#how-it-works", "How It Works"),
    ("#setup", "Quick Setup"),
    ("#demo", "Demo"),
    ("#codes", "Supported Codes"),
    ("/visualizer", "Pipeline"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Solid background once the page scrolls past the hero's top edge.
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > 20.0);
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"BuildingCode"</span>
                    <span class="nav-title-accent">"MCP"</span>
                </a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! { <a href=*href class="nav-link">{*label}</a> }
                        })
                        .collect_view()}
                    <a href=GITHUB_URL target="_blank" class="nav-cta">"GitHub"</a>
                </div>
                <button
                    class="nav-menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="nav-mobile-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=GITHUB_URL target="_blank" class="nav-mobile-link">"GitHub"</a>
                </div>
            </Show>
        </nav>
    }
}
