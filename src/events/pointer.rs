use crate::constants::{CURSOR_HOVER_CLASS, CURSOR_HOVER_TARGETS, RIPPLE_CLASS};
use crate::dom::{self, Listener};
use crate::frame::FrameScheduler;
use crate::Subscriptions;
use site_core::constants::{RIPPLE_LIFETIME_MS, TILE_RESET_MS, TILE_RESET_TRANSITION};
use site_core::{ripple_origin, PointerLoop, TiltPose};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<PointerLoop>>,
    pub scheduler: Rc<FrameScheduler>,
    pub cursor: Option<web::HtmlElement>,
    pub tiles: Rc<Vec<web::HtmlElement>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring, subs: &mut Subscriptions) {
    wire_mousemove(w, subs);
    wire_cursor_hover(w, subs);
    wire_tile_reset(w, subs);
    wire_ripple(w, subs);
}

fn wire_mousemove(w: &PointerWiring, subs: &mut Subscriptions) {
    let state = w.state.clone();
    let scheduler = w.scheduler.clone();
    subs.listen(Listener::new(
        &w.document,
        "mousemove",
        move |ev: web::MouseEvent| {
            let wants_frame = state
                .borrow_mut()
                .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
            if wants_frame {
                scheduler.request();
            }
        },
    ));
}

fn wire_cursor_hover(w: &PointerWiring, subs: &mut Subscriptions) {
    let Some(cursor) = &w.cursor else {
        return;
    };
    for el in dom::query_all::<web::Element>(&w.document, CURSOR_HOVER_TARGETS) {
        let enter = cursor.clone();
        subs.listen(Listener::new(&el, "mouseenter", move |_: web::Event| {
            _ = enter.class_list().add_1(CURSOR_HOVER_CLASS);
        }));
        let leave = cursor.clone();
        subs.listen(Listener::new(&el, "mouseleave", move |_: web::Event| {
            _ = leave.class_list().remove_1(CURSOR_HOVER_CLASS);
        }));
    }
}

// Ease back to rest, then drop the transition so per-frame tilt writes
// apply instantly again.
fn wire_tile_reset(w: &PointerWiring, subs: &mut Subscriptions) {
    let timers = subs.timers.handle();
    for tile in w.tiles.iter() {
        let t = tile.clone();
        let timers = timers.clone();
        subs.listen(Listener::new(tile, "mouseleave", move |_: web::Event| {
            dom::set_style(&t, "transition", TILE_RESET_TRANSITION);
            dom::set_style(&t, "transform", &TiltPose::NEUTRAL.to_css());
            let t2 = t.clone();
            timers.timeout(TILE_RESET_MS, move || {
                dom::set_style(&t2, "transition", "");
            });
        }));
    }
}

fn wire_ripple(w: &PointerWiring, subs: &mut Subscriptions) {
    let document = w.document.clone();
    let timers = subs.timers.handle();
    subs.listen(Listener::new(
        &w.document,
        "click",
        move |ev: web::MouseEvent| {
            let Some(body) = document.body() else {
                return;
            };
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_class_name(RIPPLE_CLASS);
            let (left, top) = ripple_origin(ev.client_x() as f64, ev.client_y() as f64);
            _ = el.set_attribute("style", &format!("left: {}px; top: {}px;", left, top));
            if body.append_child(&el).is_ok() {
                timers.timeout(RIPPLE_LIFETIME_MS, move || el.remove());
            }
        },
    ));
}
