use leptos::prelude::*;

use crate::anim::group_digits;
use crate::data::DEMO_CONVERSATIONS;

/// Tabbed fake chat window showing canned building code Q&A exchanges.
#[component]
pub fn Demo() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    view! {
        <section id="demo" class="demo">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"See It in Action"</h2>
                    <p class="section-description">"Real examples of building code queries."</p>
                </div>

                <div class="demo-tabs reveal">
                    {DEMO_CONVERSATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, convo)| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == i { "demo-tab active" } else { "demo-tab" }
                                    }
                                    on:click=move |_| set_active.set(i)
                                >
                                    {convo.category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="demo-window reveal">
                    <div class="demo-window-header">
                        <div class="terminal-dot red"></div>
                        <div class="terminal-dot yellow"></div>
                        <div class="terminal-dot green"></div>
                        <span class="demo-window-title">"Claude Desktop"</span>
                    </div>
                    <div class="demo-window-body">
                        {move || {
                            let convo = &DEMO_CONVERSATIONS[active.get()];
                            view! {
                                <div class="demo-exchange">
                                    <div class="demo-message user">{convo.question}</div>
                                    <div class="demo-message assistant">{convo.answer}</div>
                                    <div class="demo-reference">
                                        <span class="demo-reference-label">"Reference"</span>
                                        <span class="demo-reference-code">{convo.reference_code}</span>
                                        <span class="demo-reference-section">
                                            {format!("Section {}", convo.reference_section)}
                                        </span>
                                        <span class="demo-reference-page">
                                            {format!("Page {}", group_digits(u64::from(convo.reference_page)))}
                                        </span>
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                </div>

                <p class="demo-note reveal">
                    "* These are demo examples. Actual responses are based on your PDF files."
                </p>
            </div>
        </section>
    }
}
