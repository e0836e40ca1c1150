// Visualizer page - the pipeline diagram on its own route
use crate::sections::{Pipeline, ScrollReveal};
use leptos::prelude::*;

#[component]
pub fn VisualizerPage() -> impl IntoView {
    view! {
        <div class="visualizer-page">
            <Pipeline />
            <ScrollReveal />
        </div>
    }
}
