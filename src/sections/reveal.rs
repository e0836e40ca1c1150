//! Scroll-triggered fade-ins.
//!
//! One shared IntersectionObserver watches every `.reveal` element and
//! adds `.visible` the first time it enters the viewport, then stops
//! watching that element. The CSS transition does the rest.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn ScrollReveal() -> impl IntoView {
    let observer: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
        Rc::new(RefCell::new(None));

    // Runs after the page content has rendered.
    Effect::new({
        let observer = observer.clone();
        move || {
            let fresh = init_reveal_observer();
            if let Some(previous) = std::mem::replace(&mut *observer.borrow_mut(), fresh) {
                previous.disconnect();
            }
        }
    });

    // Elements still waiting to be revealed when the route changes must
    // not stay observed.
    on_cleanup({
        let observer = send_wrapper::SendWrapper::new(observer.clone());
        move || {
            if let Some(observer) = observer.borrow_mut().take() {
                observer.disconnect();
            }
        }
    });

    view! {}
}

fn init_reveal_observer() -> Option<web_sys::IntersectionObserver> {
    let document = web_sys::window().and_then(|w| w.document())?;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    if let Ok(nodes) = document.query_selector_all(".reveal") {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&el);
            }
        }
    }

    callback.forget();
    Some(observer)
}
