// BuildingCode MCP Landing Page — Leptos 0.8, client-side rendered

mod anim;
mod data;
mod metadata;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{HomePage, VisualizerPage};
use sections::{ConsoleBanner, Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <ConsoleBanner />
            <Nav />
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/visualizer") view=VisualizerPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
