use crate::constants::{DOWNLOAD_BUTTONS, DOWNLOAD_BUTTONS_FALLBACK};
use crate::dom::{self, Listener};
use crate::Subscriptions;
use site_core::constants::{DOWNLOAD_ALERT, DOWNLOAD_SIMULATION_MS, DOWNLOAD_SPINNER_HTML};
use wasm_bindgen::JsCast;
use web_sys as web;

const BUSY_ATTR: &str = "aria-busy";

/// Demo download buttons: show a spinner for a moment, then restore and alert.
pub fn wire_downloads(window: &web::Window, document: &web::Document, subs: &mut Subscriptions) {
    let buttons: Vec<web::HtmlElement> = dom::try_query_all(document, DOWNLOAD_BUTTONS)
        .unwrap_or_else(|e| {
            log::warn!("[downloads] {}; retrying without :has", e);
            dom::query_all(document, DOWNLOAD_BUTTONS_FALLBACK)
        });

    let timers = subs.timers.handle();
    for button in buttons {
        let btn = button.clone();
        let timers = timers.clone();
        let win = window.clone();
        subs.listen(Listener::new(&button, "click", move |ev: web::Event| {
            ev.prevent_default();
            // Anchors can't be disabled; without this a second click would
            // capture the spinner as the "original" content.
            if btn.get_attribute(BUSY_ATTR).as_deref() == Some("true") {
                return;
            }
            let original = btn.inner_html();
            btn.set_inner_html(DOWNLOAD_SPINNER_HTML);
            set_busy(&btn, true);

            let btn = btn.clone();
            let win = win.clone();
            timers.timeout(DOWNLOAD_SIMULATION_MS, move || {
                btn.set_inner_html(&original);
                set_busy(&btn, false);
                _ = win.alert_with_message(DOWNLOAD_ALERT);
            });
        }));
    }
}

fn set_busy(el: &web::HtmlElement, busy: bool) {
    if let Some(b) = el.dyn_ref::<web::HtmlButtonElement>() {
        b.set_disabled(busy);
    }
    if busy {
        _ = el.set_attribute(BUSY_ATTR, "true");
    } else {
        _ = el.remove_attribute(BUSY_ATTR);
    }
}
