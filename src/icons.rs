use crate::constants::ICON_SELECTOR;
use crate::dom::{self, Interval, TimerHandle};
use crate::Subscriptions;
use site_core::{IconAnimation, IconPalette, IconRandomizer, InteractionConfig, RandomSource};
use web_sys as web;

/// `Math.random` as a [`RandomSource`].
pub struct JsRandom;

impl RandomSource for JsRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Clear first, re-apply on the next frame: assigning the same shorthand
/// twice would otherwise not restart the keyframes.
fn apply(timers: &TimerHandle, icon: &web::HtmlElement, animation: &IconAnimation) {
    dom::set_style(icon, "animation", "none");
    let icon = icon.clone();
    let css = animation.to_css();
    timers.frame(move |_| dom::set_style(&icon, "animation", &css));
}

pub fn wire_icon_randomizer(
    document: &web::Document,
    cfg: &InteractionConfig,
    subs: &mut Subscriptions,
) {
    let icons: Vec<web::HtmlElement> = dom::query_all(document, ICON_SELECTOR);
    let mut randomizer = IconRandomizer::new(IconPalette::default(), JsRandom);
    let timers = subs.timers.handle();

    for s in randomizer.initial_schedule(icons.len()) {
        let icon = icons[s.icon].clone();
        let t = timers.clone();
        timers.timeout(s.delay_ms, move || apply(&t, &icon, &s.animation));
    }

    // Re-query each tick so icons added or removed since load are respected.
    let doc = document.clone();
    let tick = Interval::new(cfg.icon_interval_ms, move || {
        let icons: Vec<web::HtmlElement> = dom::query_all(&doc, ICON_SELECTOR);
        if let Some((i, animation)) = randomizer.reassign(icons.len()) {
            apply(&timers, &icons[i], &animation);
        }
    });
    if let Some(tick) = tick {
        subs.intervals.push(tick);
    }
    log::info!("[icons] {} icons animated", icons.len());
}
