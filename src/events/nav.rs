use crate::constants::{
    ANCHOR_SELECTOR, HIDDEN_CLASS, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_CLOSERS, MOBILE_MENU_ID,
};
use crate::dom::{self, Listener, TimerHandle};
use crate::Subscriptions;
use site_core::easing::{anchor_destination, ScrollTween};
use site_core::{MenuState, MENU_ICON_CLOSED, MENU_ICON_OPEN};
use web_sys as web;

#[derive(Clone)]
pub struct MobileMenu {
    menu: web::Element,
    icon: Option<web::Element>,
}

impl MobileMenu {
    fn read(&self) -> MenuState {
        let (bars, times) = match &self.icon {
            Some(i) => {
                let cl = i.class_list();
                (cl.contains(MENU_ICON_CLOSED), cl.contains(MENU_ICON_OPEN))
            }
            None => (true, false),
        };
        MenuState {
            hidden: self.menu.class_list().contains(HIDDEN_CLASS),
            bars,
            times,
        }
    }

    fn write(&self, s: MenuState) {
        _ = self.menu.class_list().toggle_with_force(HIDDEN_CLASS, s.hidden);
        if let Some(i) = &self.icon {
            let cl = i.class_list();
            _ = cl.toggle_with_force(MENU_ICON_CLOSED, s.bars);
            _ = cl.toggle_with_force(MENU_ICON_OPEN, s.times);
        }
    }

    pub fn toggle(&self) {
        let mut s = self.read();
        s.toggle();
        self.write(s);
    }

    pub fn close(&self) {
        let mut s = self.read();
        s.close();
        self.write(s);
    }

    pub fn is_open(&self) -> bool {
        self.read().is_open()
    }
}

/// Wires the burger button and the links that close the menu. `None` when
/// the page has no mobile menu.
pub fn wire_mobile_menu(document: &web::Document, subs: &mut Subscriptions) -> Option<MobileMenu> {
    let button = document.get_element_by_id(MOBILE_MENU_BUTTON_ID)?;
    let menu = document.get_element_by_id(MOBILE_MENU_ID)?;
    let mobile = MobileMenu {
        menu,
        icon: button.query_selector("i").ok().flatten(),
    };

    let m = mobile.clone();
    subs.listen(Listener::new(&button, "click", move |_: web::Event| {
        m.toggle();
        log::debug!("[menu] open={}", m.is_open());
    }));

    for link in dom::query_all::<web::Element>(document, MOBILE_MENU_CLOSERS) {
        let m = mobile.clone();
        subs.listen(Listener::new(&link, "click", move |_: web::Event| m.close()));
    }
    Some(mobile)
}

pub fn wire_anchor_scroll(
    window: &web::Window,
    document: &web::Document,
    menu: Option<MobileMenu>,
    subs: &mut Subscriptions,
) {
    let timers = subs.timers.handle();
    for anchor in dom::query_all::<web::Element>(document, ANCHOR_SELECTOR) {
        let a = anchor.clone();
        let win = window.clone();
        let doc = document.clone();
        let menu = menu.clone();
        let timers = timers.clone();
        subs.listen(Listener::new(&anchor, "click", move |ev: web::Event| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            // An href that is not a valid selector behaves like a missing target.
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            ev.prevent_default();

            let start = win.scroll_y().unwrap_or(0.0);
            let end = anchor_destination(target.get_bounding_client_rect().top(), start);
            run_tween(timers.clone(), win.clone(), ScrollTween::new(start, end));

            if let Some(m) = &menu {
                if m.is_open() {
                    m.close();
                }
            }
        }));
    }
}

/// One tween step per animation frame, cancelled with the rest on teardown.
fn run_tween(timers: TimerHandle, window: web::Window, mut tween: ScrollTween) {
    let next = timers.clone();
    timers.frame(move |now| {
        let s = tween.sample(now);
        window.scroll_to_with_x_and_y(0.0, s.y);
        if !s.done {
            run_tween(next, window, tween);
        }
    });
}
