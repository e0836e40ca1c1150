use leptos::prelude::*;

use crate::data::{MCP_CONFIG_SNIPPET, PIP_INSTALL_COMMAND, SMITHERY_URL};

#[component]
pub fn Setup() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_config = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(MCP_CONFIG_SNIPPET);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section id="setup" class="setup">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"Get Started"</p>
                    <h2 class="section-title">"Quick Setup"</h2>
                </div>

                <div class="setup-grid">
                    <div class="setup-card reveal">
                        <span class="setup-step-num">"1"</span>
                        <h3 class="setup-card-title">"pip install"</h3>
                        <div class="setup-command-box">
                            <code class="setup-cmd">{PIP_INSTALL_COMMAND}</code>
                        </div>
                        <p class="setup-note">"Add this to your MCP client config file:"</p>
                        <div class="code-block-with-copy">
                            <pre class="code-block-content">{MCP_CONFIG_SNIPPET}</pre>
                            <button class="code-copy-btn" on:click=copy_config>
                                {move || if copied.get() { "copied" } else { "copy" }}
                            </button>
                        </div>
                    </div>

                    <div class="setup-card reveal">
                        <span class="setup-step-num">"2"</span>
                        <h3 class="setup-card-title">"Smithery (One-click)"</h3>
                        <a href=SMITHERY_URL target="_blank" class="btn btn-primary setup-smithery">
                            "Install on Smithery"
                        </a>
                        <p class="setup-note">"No manual config needed. Just click and install."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
