use site_core::PendingSet;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn try_query_all<T: JsCast>(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<T>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("query `{}` failed: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect())
}

/// All matches that are of type `T`; an invalid selector logs and yields none.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    try_query_all(document, selector).unwrap_or_else(|e| {
        log::warn!("[dom] {}", e);
        Vec::new()
    })
}

pub fn query_one<T: JsCast>(document: &web::Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Event subscription that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Option<Self> {
        Self::register(target, event, handler, false)
    }

    /// Same as [`Listener::new`] but tells the browser the handler never calls
    /// `preventDefault`, so scrolling is not blocked on it.
    pub fn passive<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Option<Self> {
        Self::register(target, event, handler, true)
    }

    fn register<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
        passive: bool,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let res = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
        } else {
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        };
        match res {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                log::warn!("[dom] could not listen for `{}`: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Repeating timer, cleared on drop.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("[dom] setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

enum Pending {
    Timeout(i32),
    Frame(i32),
}

#[derive(Default)]
struct TimerSet(PendingSet<Pending>);

impl Drop for TimerSet {
    fn drop(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        // Cleared callbacks never run, so their JS closures stay allocated.
        for p in self.0.drain() {
            match p {
                Pending::Timeout(handle) => w.clear_timeout_with_handle(handle),
                Pending::Frame(id) => {
                    _ = w.cancel_animation_frame(id);
                }
            }
        }
    }
}

/// Owner of every pending one-shot timeout and animation frame. Dropping it
/// cancels whatever has not fired yet.
#[derive(Default)]
pub struct Timers {
    set: Rc<RefCell<TimerSet>>,
}

impl Timers {
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            set: Rc::downgrade(&self.set),
        }
    }

    pub fn pending(&self) -> usize {
        self.set.borrow().0.len()
    }
}

/// Schedules one-shot callbacks on a [`Timers`]. Once the owner is gone,
/// scheduling is a no-op.
#[derive(Clone)]
pub struct TimerHandle {
    set: Weak<RefCell<TimerSet>>,
}

impl TimerHandle {
    pub fn timeout(&self, delay_ms: i32, f: impl FnOnce() + 'static) {
        self.schedule(
            move |w, cb| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(cb, delay_ms)
                    .map(Pending::Timeout)
            },
            move |_| f(),
        );
    }

    /// `f` receives the frame timestamp.
    pub fn frame(&self, f: impl FnOnce(f64) + 'static) {
        self.schedule(
            |w, cb| w.request_animation_frame(cb).map(Pending::Frame),
            f,
        );
    }

    fn schedule(
        &self,
        register: impl FnOnce(&web::Window, &js_sys::Function) -> Result<Pending, JsValue>,
        f: impl FnOnce(f64) + 'static,
    ) {
        let (Some(set), Some(w)) = (self.set.upgrade(), web::window()) else {
            return;
        };
        let key = set.borrow_mut().0.reserve();
        let weak = self.set.clone();
        let cb = Closure::once_into_js(move |arg: JsValue| {
            let Some(set) = weak.upgrade() else {
                return;
            };
            if !set.borrow_mut().0.claim(key) {
                return;
            }
            f(arg.as_f64().unwrap_or(0.0));
        });
        match register(&w, cb.unchecked_ref()) {
            Ok(p) => set.borrow_mut().0.arm(key, p),
            Err(e) => log::warn!("[dom] could not schedule callback: {:?}", e),
        }
    }
}
