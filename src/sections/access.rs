use leptos::prelude::*;

use crate::data::CHATGPT_URL;

#[component]
pub fn Access() -> impl IntoView {
    view! {
        <section id="access" class="access">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"Two Ways to Access"</p>
                    <h2 class="section-title">"Choose Your Experience"</h2>
                    <p class="section-description">
                        "Same 25,000+ indexed sections, two powerful ways to access them"
                    </p>
                </div>

                <div class="access-grid">
                    <div class="access-card recommended reveal">
                        <span class="access-flag">"Recommended"</span>
                        <h3 class="access-card-title">"MCP Server"</h3>
                        <p class="access-card-subtitle">"For Developers"</p>
                        <ul class="access-list">
                            <li>"Works with any MCP-compatible client"</li>
                            <li>"Full control over search parameters"</li>
                            <li>"BYOD mode for complete text extraction"</li>
                            <li>"Open source & self-hostable"</li>
                        </ul>
                        <a href="#how-it-works" class="btn btn-primary">"Setup Instructions"</a>
                    </div>

                    <div class="access-card reveal">
                        <h3 class="access-card-title">"ChatGPT App"</h3>
                        <p class="access-card-subtitle">"For Everyone"</p>
                        <ul class="access-list">
                            <li>"No setup required - just chat"</li>
                            <li>"Natural conversation interface"</li>
                            <li>"Requires building code PDF for text"</li>
                            <li>"Works on mobile & desktop"</li>
                        </ul>
                        <a href=CHATGPT_URL target="_blank" class="btn btn-secondary">
                            "Open in ChatGPT"
                        </a>
                    </div>
                </div>

                <div class="access-table reveal">
                    <table>
                        <thead>
                            <tr>
                                <th></th>
                                <th>"ChatGPT App"</th>
                                <th>"MCP Server"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                <td>"PDF Source"</td>
                                <td colspan="2">"User-provided code PDF"</td>
                            </tr>
                            <tr>
                                <td>"Speed"</td>
                                <td>"May vary"</td>
                                <td class="highlight">"Fast"</td>
                            </tr>
                            <tr>
                                <td>"Setup"</td>
                                <td class="highlight">"None"</td>
                                <td>"One-time install"</td>
                            </tr>
                            <tr>
                                <td>"Best For"</td>
                                <td>"Casual exploration"</td>
                                <td class="highlight">"Production, automation"</td>
                            </tr>
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}
