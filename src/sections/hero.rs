use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;

use crate::anim::{CancelFlag, Pacing, Typewriter};
use crate::data::{CHATGPT_URL, TYPEWRITER_QUERIES};

#[component]
pub fn Hero() -> impl IntoView {
    let (typed, set_typed) = signal(String::new());

    let machine = Rc::new(RefCell::new(Typewriter::new(
        TYPEWRITER_QUERIES,
        Pacing::default(),
    )));
    // Teardown clears the queued timeout and raises the flag; the flag
    // covers a callback that was already dispatched before the clear.
    let halted = CancelFlag::new();
    let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));
    on_cleanup({
        let halted = send_wrapper::SendWrapper::new(halted.clone());
        let pending = send_wrapper::SendWrapper::new(pending.clone());
        move || {
            halted.halt();
            if let Some(handle) = (*pending).take() {
                handle.clear();
            }
        }
    });
    schedule_tick(
        machine,
        halted,
        pending,
        set_typed,
        Pacing::default().type_delay,
    );

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-badges reveal">
                    <span class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "25,707 sections indexed"
                    </span>
                    <span class="hero-badge hero-badge-oss">"Free & Open Source"</span>
                </div>
                <h1 class="hero-title reveal">
                    "Canadian Building Code"
                    <br />
                    <span class="hero-title-accent">"Navigator"</span>
                </h1>
                <p class="hero-description reveal">
                    "Get exact answers from 25,707 sections. "
                    "No PDF hunting. No guesswork."
                </p>

                // Fake search box driven by the typewriter machine.
                <div class="hero-search reveal">
                    <span class="hero-search-icon"></span>
                    <span class="hero-search-text">
                        {move || typed.get()}
                        <span class="hero-search-caret"></span>
                    </span>
                    <a href="#access" class="hero-search-btn">"Search"</a>
                </div>

                <div class="hero-actions reveal">
                    <a href=CHATGPT_URL target="_blank" class="btn btn-primary">
                        "Try on ChatGPT"
                    </a>
                    <a href="#access" class="btn btn-secondary">
                        "MCP Server →"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Schedules one typewriter tick. Each firing applies a transition and
/// reschedules itself with the delay the machine asks for, so typing,
/// holding, and deleting all pace differently off a single pending timer.
/// The handle of that one timer lives in `pending` so teardown can clear
/// it.
fn schedule_tick(
    machine: Rc<RefCell<Typewriter>>,
    halted: CancelFlag,
    pending: Rc<Cell<Option<TimeoutHandle>>>,
    set_typed: WriteSignal<String>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        {
            let pending = pending.clone();
            move || {
                if halted.is_halted() {
                    return;
                }
                let next_delay = machine.borrow_mut().tick();
                set_typed.set(machine.borrow().text().to_owned());
                schedule_tick(machine, halted, pending, set_typed, next_delay);
            }
        },
        delay,
    );
    pending.set(handle.ok());
}
