use leptos::prelude::*;

struct ComparisonRow {
    rag_quote: &'static str,
    rag_verdict: &'static str,
    mcp_quote: &'static str,
    mcp_verdict: &'static str,
}

const ROWS: &[ComparisonRow] = &[
    ComparisonRow {
        rag_quote: "\"Mass timber allowed up to 12 storeys per Section 3.2.2.55, page 200\"",
        rag_verdict: "Wrong page (actual: p.245)",
        mcp_quote: "\"Section 3.2.2.55 found on page 245\"",
        mcp_verdict: "Exact page verified from PDF",
    },
    ComparisonRow {
        rag_quote: "\"Fire rating between garage and suite is covered in Section 3.2.8.15\"",
        rag_verdict: "Section 3.2.8.15 doesn't exist",
        mcp_quote: "\"Section not found. Did you mean 3.2.1.2?\"",
        mcp_verdict: "Suggests correct section",
    },
];

#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section class="comparison">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"No More Hallucinations"</p>
                    <h2 class="section-title">"RAG vs MCP: Building Codes"</h2>
                    <div class="comparison-checks">
                        <span>"✓ 25,000+ sections indexed"</span>
                        <span>"✓ 100% verifiable"</span>
                        <span>"✓ Exact page numbers"</span>
                    </div>
                </div>

                <div class="comparison-columns reveal">
                    <div class="comparison-col-head rag">"RAG System"</div>
                    <div class="comparison-col-head mcp">"Building Code MCP"</div>
                </div>

                {ROWS
                    .iter()
                    .map(|row| {
                        view! {
                            <div class="comparison-row reveal">
                                <div class="comparison-cell rag">
                                    <code class="comparison-quote">{row.rag_quote}</code>
                                    <p class="comparison-verdict bad">{row.rag_verdict}</p>
                                </div>
                                <div class="comparison-cell mcp">
                                    <code class="comparison-quote">{row.mcp_quote}</code>
                                    <p class="comparison-verdict good">{row.mcp_verdict}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
