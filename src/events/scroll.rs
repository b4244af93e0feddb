use crate::constants::{FEATURE_LINE_ID, NAVBAR_CONDENSED_CLASSES, NAVBAR_ID};
use crate::dom::{self, Listener};
use crate::frame::{FrameScheduler, ScrollLineFrame};
use crate::Subscriptions;
use site_core::{navbar_condensed, InteractionConfig, ScrollLine};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_navbar(window: &web::Window, document: &web::Document, subs: &mut Subscriptions) {
    let Some(navbar) = document.get_element_by_id(NAVBAR_ID) else {
        return;
    };
    let win = window.clone();
    subs.listen(Listener::passive(window, "scroll", move |_: web::Event| {
        let condensed = navbar_condensed(win.scroll_y().unwrap_or(0.0));
        let classes = navbar.class_list();
        for c in NAVBAR_CONDENSED_CLASSES {
            _ = classes.toggle_with_force(c, condensed);
        }
    }));
}

/// Horizontal drift of the feature line, driven only by scroll events.
pub fn wire_feature_line(
    window: &web::Window,
    document: &web::Document,
    cfg: &InteractionConfig,
    subs: &mut Subscriptions,
) {
    let Some(line) = dom::by_id::<web::HtmlElement>(document, FEATURE_LINE_ID) else {
        log::warn!("[line] #{} not found; scroll effect disabled", FEATURE_LINE_ID);
        return;
    };
    let state = Rc::new(RefCell::new(ScrollLine::from_config(cfg)));
    let line_frame = ScrollLineFrame {
        window: window.clone(),
        state: state.clone(),
        line,
    };
    line_frame.frame();

    let dropped = state.clone();
    let scheduler = Rc::new(FrameScheduler::new(
        move |_| {
            line_frame.frame();
            false
        },
        move || dropped.borrow_mut().frame_dropped(),
    ));
    let sched = scheduler.clone();
    subs.listen(Listener::passive(window, "scroll", move |_: web::Event| {
        if state.borrow_mut().scrolled() {
            sched.request();
        }
    }));
    subs.schedulers.push(scheduler);
    log::info!("[line] scroll effect active");
}
