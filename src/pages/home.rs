// Home page - hero + marketing sections
use crate::sections::{
    Access, CodeList, Comparison, Demo, Hero, HowItWorks, ScrollReveal, Setup, Stats,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Stats />
        <Comparison />
        <Access />
        <HowItWorks />
        <Demo />
        <Setup />
        <CodeList />
        <ScrollReveal />
    }
}
