use crate::dom;
use crate::Subscriptions;
use site_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use site_core::reveal_delay_ms;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Owns an `IntersectionObserver` and its callback; disconnects on drop.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_tiles(tiles: &[web::HtmlElement], subs: &mut Subscriptions) -> anyhow::Result<()> {
    let timers = subs.timers.handle();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(target) = entry.target().dyn_into::<web::HtmlElement>() else {
                    continue;
                };
                timers.timeout(reveal_delay_ms(index), move || {
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                });
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for tile in tiles {
        observer.observe(tile);
    }
    subs.observers.push(Observer {
        observer,
        _callback: callback,
    });
    Ok(())
}
