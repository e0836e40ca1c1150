use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::anim::{group_digits, CancelFlag};
use crate::metadata::{fetch_summary, MetadataSummary};

/// Animated "how a query flows through the MCP server" diagram. The
/// numbers on the code-maps node come from the static metadata summary;
/// until (or unless) that fetch lands, they read as loading placeholders.
#[component]
pub fn Pipeline() -> impl IntoView {
    let (summary, set_summary) = signal(None::<MetadataSummary>);

    // One fetch per mount. A failure keeps the placeholder; nothing
    // retries. The flag keeps a fetch that resolves after navigation away
    // from writing to a disposed signal.
    let halted = CancelFlag::new();
    on_cleanup({
        let halted = send_wrapper::SendWrapper::new(halted.clone());
        move || halted.halt()
    });
    spawn_local(async move {
        if let Some(loaded) = fetch_summary().await {
            if !halted.is_halted() {
                set_summary.set(Some(loaded));
            }
        }
    });

    let maps_sublabel = move || {
        summary
            .with(|s| {
                s.as_ref().map(|s| {
                    format!(
                        "{} sections · {} tables · {:.0} MB",
                        group_digits(s.total_sections),
                        group_digits(s.total_tables),
                        s.total_size_mb,
                    )
                })
            })
            .unwrap_or_else(|| "Loading...".to_string())
    };

    view! {
        <section id="pipeline" class="pipeline">
            <div class="section-header reveal">
                <p class="section-eyebrow">"Under the Hood"</p>
                <h2 class="section-title">"How MCP Processes a Query"</h2>
                <p class="section-description">
                    "From question to exact section, the full pipeline at a glance"
                </p>
            </div>

            <div class="pipeline-flow reveal">
                <FlowNode label="User / Claude" color="#3b82f6">
                    "\"What are the fire rating requirements?\""
                </FlowNode>
                <Connector color="#3b82f6" />
                <FlowNode
                    label="MCP Server"
                    color="#06b6d4"
                    large=true
                    badges={&["10 Tools", "4 Prompts", "4 Resources"]}
                >
                    "Canadian Building Code MCP"
                </FlowNode>
                <FanOut color="#8b5cf6" />
                <div class="pipeline-steps">
                    <ProcessStep label="Tokenize" sublabel="Split query" color="#8b5cf6" />
                    <ProcessStep label="Synonyms" sublabel="45 pairs" color="#a855f7" />
                    <ProcessStep label="TF-IDF" sublabel="Score & rank" color="#7c3aed" />
                </div>
                <FanIn color="#8b5cf6" />
                <FlowNode
                    label="16 Building Code Maps"
                    color="#8b5cf6"
                    badges={&["13 Codes", "3 Guides"]}
                >
                    {maps_sublabel}
                </FlowNode>
                <Connector color="#10b981" />
                <FlowNode
                    label="Coordinates"
                    color="#10b981"
                    badges={&["Section ID", "Page #", "Score", "BBox"]}
                >
                    "Copyright safe, no text distributed"
                </FlowNode>
                <Connector color="#f59e0b" />
                <FlowNode
                    label="Your PDF"
                    color="#f59e0b"
                    badges={&["Full Text", "Table Data", "Page Content"]}
                >
                    "Text extracted from your local file"
                </FlowNode>
                <Connector color="#ec4899" />
                <FlowNode
                    label="Answer"
                    color="#ec4899"
                    badges={&["Section ID", "Page Text", "Table Data"]}
                >
                    "Exact section refs + extracted text"
                </FlowNode>
            </div>
        </section>
    }
}

/// Glassmorphic card for one pipeline stage. `children` is the sublabel
/// slot so callers can pass reactive text.
#[component]
fn FlowNode(
    label: &'static str,
    color: &'static str,
    #[prop(optional)] large: bool,
    #[prop(optional)] badges: &'static [&'static str],
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=if large { "flow-node large" } else { "flow-node" }
            style=format!("--accent: {color}")
        >
            <h3 class="flow-node-label">{label}</h3>
            <p class="flow-node-sublabel">{children()}</p>
            <Show when=move || !badges.is_empty()>
                <div class="flow-node-badges">
                    {badges
                        .iter()
                        .map(|badge| view! { <span class="flow-node-badge">{*badge}</span> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Vertical line with a CSS-animated dot flowing between two stages.
#[component]
fn Connector(color: &'static str) -> impl IntoView {
    view! {
        <div class="flow-connector" style=format!("--accent: {color}")>
            <span class="flow-connector-dot"></span>
            <span class="flow-connector-dot delayed"></span>
        </div>
    }
}

#[component]
fn FanOut(color: &'static str) -> impl IntoView {
    view! {
        <svg class="flow-fan" width="300" height="24" viewBox="0 0 300 24" fill="none">
            <path d="M150 0 Q150 12 50 24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <line x1="150" y1="0" x2="150" y2="24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <path d="M150 0 Q150 12 250 24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <circle cx="50" cy="24" r="2" fill=color fill-opacity="0.35" />
            <circle cx="150" cy="24" r="2" fill=color fill-opacity="0.35" />
            <circle cx="250" cy="24" r="2" fill=color fill-opacity="0.35" />
        </svg>
    }
}

#[component]
fn FanIn(color: &'static str) -> impl IntoView {
    view! {
        <svg class="flow-fan" width="300" height="24" viewBox="0 0 300 24" fill="none">
            <path d="M50 0 Q50 12 150 24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <line x1="150" y1="0" x2="150" y2="24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <path d="M250 0 Q250 12 150 24" stroke=color stroke-opacity="0.25" stroke-width="1" />
            <circle cx="150" cy="24" r="2" fill=color fill-opacity="0.35" />
        </svg>
    }
}

/// Compact pill for the three query-processing steps.
#[component]
fn ProcessStep(
    label: &'static str,
    sublabel: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="process-step" style=format!("--accent: {color}")>
            <span class="process-step-label">{label}</span>
            <span class="process-step-sublabel">{sublabel}</span>
        </div>
    }
}
