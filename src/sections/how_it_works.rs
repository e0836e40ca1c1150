use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"How It Works"</p>
                    <h2 class="section-title">"Get Started in 2 Steps"</h2>
                </div>

                <div class="steps-grid">
                    <StepCard
                        number="1"
                        title="Connect MCP Server"
                        description="Add Building Code MCP to Claude Desktop config."
                    />
                    <StepCard
                        number="2"
                        title="Bring Your Own PDF"
                        description="MCP server can help download PDFs, or get them manually from official sources."
                    />
                </div>

                <div class="copyright-safe reveal">
                    <h3 class="copyright-safe-title">"Copyright Safe"</h3>
                    <p class="copyright-safe-text">
                        "This tool only distributes coordinates (page, position), not the actual text. "
                        "Content is read from your own PDF files."
                    </p>
                    <div class="copyright-safe-checks">
                        <span>"✓ No text stored"</span>
                        <span>"✓ Your PDF, your content"</span>
                        <span>"✓ NRC policy compliant"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="step-card reveal">
            <span class="step-num">{number}</span>
            <h3 class="step-title">{title}</h3>
            <p class="step-description">{description}</p>
        </article>
    }
}
