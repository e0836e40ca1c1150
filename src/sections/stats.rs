use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::Span;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::anim::{group_digits, CountUp, CountUpConfig};
use crate::data::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-card reveal">
                                    <div class=format!("stat-icon stat-icon-{}", stat.icon)></div>
                                    <div class="stat-value">
                                        <AnimatedNumber value=stat.value />
                                    </div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Counts up from 0 to `value` the first time the element scrolls into
/// view. The start latch is edge-triggered: leaving and re-entering the
/// viewport never restarts the animation.
#[component]
fn AnimatedNumber(value: u64) -> impl IntoView {
    let (shown, set_shown) = signal(0u64);
    let node = NodeRef::<Span>::new();

    let started = Rc::new(Cell::new(false));
    let ticker: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));

    on_cleanup({
        let ticker = send_wrapper::SendWrapper::new(ticker.clone());
        move || {
            if let Some(handle) = (*ticker).take() {
                handle.clear();
            }
        }
    });

    Effect::new({
        let started = started.clone();
        let ticker = ticker.clone();
        move || {
            let Some(el) = node.get() else { return };
            observe_first_view(&el, {
                let started = started.clone();
                let ticker = ticker.clone();
                move || {
                    if started.replace(true) {
                        return;
                    }
                    start_count_up(value, set_shown, ticker.clone());
                }
            });
        }
    });

    view! {
        <span class="stat-number" node_ref=node>
            {move || group_digits(shown.get())}
        </span>
    }
}

/// Runs `on_visible` once the element first intersects the viewport, then
/// disconnects the observer.
fn observe_first_view(el: &web_sys::Element, on_visible: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    );
    if let Ok(observer) = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        observer.observe(el);
    }
    callback.forget();
}

/// Drives a [`CountUp`] with a fixed-rate interval, clearing the timer the
/// moment the machine reports completion.
fn start_count_up(
    target: u64,
    set_shown: WriteSignal<u64>,
    ticker: Rc<Cell<Option<IntervalHandle>>>,
) {
    let config = CountUpConfig::default();
    let machine = Rc::new(RefCell::new(CountUp::new(target, config)));
    let handle = set_interval_with_handle(
        {
            let ticker = ticker.clone();
            move || {
                let done = machine.borrow_mut().tick();
                set_shown.set(machine.borrow().value());
                if done {
                    if let Some(handle) = ticker.take() {
                        handle.clear();
                    }
                }
            }
        },
        config.interval(),
    );
    ticker.set(handle.ok());
}
