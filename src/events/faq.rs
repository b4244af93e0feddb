use crate::constants::{ACTIVE_CLASS, FAQ_ITEM_SELECTOR};
use crate::dom::{self, Listener};
use crate::Subscriptions;
use site_core::Accordion;
use std::rc::Rc;
use web_sys as web;

pub fn wire_faq(document: &web::Document, subs: &mut Subscriptions) {
    let items = Rc::new(dom::query_all::<web::Element>(document, FAQ_ITEM_SELECTOR));
    for (index, item) in items.iter().enumerate() {
        let all = items.clone();
        subs.listen(Listener::new(item, "click", move |_: web::Event| {
            let flags: Vec<bool> = all
                .iter()
                .map(|el| el.class_list().contains(ACTIVE_CLASS))
                .collect();
            let mut accordion = Accordion::from_flags(&flags);
            accordion.click(index);
            for (j, el) in all.iter().enumerate() {
                _ = el
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, accordion.is_active(j));
            }
        }));
    }
}
