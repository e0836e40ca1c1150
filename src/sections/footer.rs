use leptos::prelude::*;

use crate::data::GITHUB_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"BuildingCode MCP"</span>
                </div>
                <div class="footer-links">
                    <a href=GITHUB_URL target="_blank" class="footer-link">"GitHub"</a>
                    <a href="https://pypi.org/project/building-code-mcp/" target="_blank" class="footer-link">
                        "PyPI"
                    </a>
                    <a href="/visualizer" class="footer-link">"Pipeline"</a>
                </div>
                <p class="footer-copyright">"© 2026 BuildingCode MCP"</p>
            </div>
        </footer>
    }
}
