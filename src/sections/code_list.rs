use leptos::prelude::*;

use crate::anim::group_digits;
use crate::data::CODE_GROUPS;

#[component]
pub fn CodeList() -> impl IntoView {
    view! {
        <section id="codes" class="code-list">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"Supported Codes"</p>
                    <h2 class="section-title">"Comprehensive Coverage"</h2>
                    <p class="section-description">
                        "From National Codes to Provincial Codes and User Guides, "
                        "we support all major Canadian building codes."
                    </p>
                </div>

                <div class="code-groups">
                    {CODE_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class=format!("code-group reveal accent-{}", group.accent)>
                                    <div class="code-group-header">
                                        <h3 class="code-group-title">{group.title}</h3>
                                    </div>
                                    <div class="code-group-body">
                                        {group
                                            .codes
                                            .iter()
                                            .map(|code| {
                                                view! {
                                                    <div class="code-entry">
                                                        <div class="code-entry-head">
                                                            <span class="code-entry-name">{code.name}</span>
                                                            {code
                                                                .province
                                                                .map(|p| {
                                                                    view! { <span class="code-entry-province">{p}</span> }
                                                                })}
                                                        </div>
                                                        <div class="code-entry-full">{code.full_name}</div>
                                                        <div class="code-entry-sections">
                                                            {format!("{} sections", group_digits(code.sections))}
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
