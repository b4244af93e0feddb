#![cfg(target_arch = "wasm32")]
use site_core::{AosConfig, InteractionConfig, PointerLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod aos;
mod constants;
mod dom;
mod events;
mod frame;
mod icons;
mod reveal;

use constants::{CURSOR_DOT_SELECTOR, CURSOR_SELECTOR, NO_HOVER_MEDIA, TILE_SELECTOR};

/// Everything the site registered with the browser. Dropping it unhooks all
/// of it: listeners first so nothing new gets scheduled, then the interval
/// and observer, then pending one-shot callbacks, and the frame loops last.
#[derive(Default)]
pub struct Subscriptions {
    pub listeners: Vec<dom::Listener>,
    pub intervals: Vec<dom::Interval>,
    pub observers: Vec<reveal::Observer>,
    pub timers: dom::Timers,
    pub schedulers: Vec<Rc<frame::FrameScheduler>>,
}

impl Subscriptions {
    #[inline]
    pub fn listen(&mut self, listener: Option<dom::Listener>) {
        if let Some(l) = listener {
            self.listeners.push(l);
        }
    }
}

thread_local! {
    // Teardown handle only; interaction state lives with each component.
    static MOUNTED: RefCell<Option<Subscriptions>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || mount_once());
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_once();
    }
    Ok(())
}

/// Unregister every listener, timer, observer and frame request.
#[wasm_bindgen]
pub fn teardown() {
    if MOUNTED.with(|m| m.borrow_mut().take()).is_some() {
        log::info!("[site] torn down");
    }
}

fn mount_once() {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return;
    }
    match mount() {
        Ok(subs) => MOUNTED.with(|m| *m.borrow_mut() = Some(subs)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

fn read_config(document: &web::Document) -> InteractionConfig {
    let body = document.body();
    InteractionConfig::default().with_overrides(|key| body.as_ref()?.get_attribute(key))
}

fn hover_unsupported(window: &web::Window) -> bool {
    window
        .match_media(NO_HOVER_MEDIA)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn mount() -> anyhow::Result<Subscriptions> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let cfg = read_config(&document);
    let mut subs = Subscriptions::default();

    match aos::init(&window, &AosConfig::default()) {
        Ok(true) => log::info!("[aos] initialised"),
        Ok(false) => log::warn!("AOS library not loaded"),
        Err(e) => log::warn!("[aos] init failed: {:?}", e),
    }

    // Touch screens get no custom cursor; tiles still tilt.
    let mut cursor = dom::query_one::<web::HtmlElement>(&document, CURSOR_SELECTOR);
    let mut cursor_dot = dom::query_one::<web::HtmlElement>(&document, CURSOR_DOT_SELECTOR);
    if hover_unsupported(&window) {
        if let Some(c) = cursor.take() {
            c.remove();
        }
        if let Some(d) = cursor_dot.take() {
            d.remove();
        }
        log::info!("[cursor] no hover support; custom cursor removed");
    }

    let tiles = Rc::new(dom::query_all::<web::HtmlElement>(&document, TILE_SELECTOR));
    let pointer = Rc::new(RefCell::new(PointerLoop::from_config(&cfg)));
    let parallax = frame::ParallaxFrame {
        window: window.clone(),
        state: pointer.clone(),
        cursor: cursor.clone(),
        cursor_dot,
        tiles: tiles.clone(),
    };
    let dropped = pointer.clone();
    let scheduler = Rc::new(frame::FrameScheduler::new(
        move |_| parallax.frame(),
        move || dropped.borrow_mut().frame_dropped(),
    ));
    events::wire_pointer_handlers(
        &events::PointerWiring {
            document: document.clone(),
            state: pointer,
            scheduler: scheduler.clone(),
            cursor,
            tiles: tiles.clone(),
        },
        &mut subs,
    );
    subs.schedulers.push(scheduler);

    events::wire_navbar(&window, &document, &mut subs);
    events::wire_feature_line(&window, &document, &cfg, &mut subs);
    let menu = events::wire_mobile_menu(&document, &mut subs);
    events::wire_anchor_scroll(&window, &document, menu, &mut subs);
    events::wire_faq(&document, &mut subs);
    events::wire_downloads(&window, &document, &mut subs);
    if let Err(e) = reveal::observe_tiles(&tiles, &mut subs) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    icons::wire_icon_randomizer(&document, &cfg, &mut subs);

    log::info!(
        "[site] mounted: tiles={} listeners={} timers={} lerp={} epsilon={}",
        tiles.len(),
        subs.listeners.len(),
        subs.timers.pending(),
        cfg.lerp_factor,
        cfg.settle_epsilon
    );
    Ok(subs)
}
