// Host-side tests for menu, FAQ accordion and navbar state.

use site_core::{navbar_condensed, Accordion, MenuState};

#[test]
fn menu_starts_closed_and_toggles_all_flags() {
    let mut m = MenuState::default();
    assert!(!m.is_open());
    assert!(m.bars && !m.times);

    m.toggle();
    assert!(m.is_open());
    assert_eq!(
        m,
        MenuState {
            hidden: false,
            bars: false,
            times: true,
        }
    );

    m.toggle();
    assert_eq!(m, MenuState::closed());
}

#[test]
fn menu_double_toggle_restores_odd_markup() {
    let start = MenuState {
        hidden: true,
        bars: true,
        times: true,
    };
    let mut m = start;
    m.toggle();
    m.toggle();
    assert_eq!(m, start);
}

#[test]
fn menu_close_is_idempotent() {
    let mut m = MenuState::default();
    m.toggle();
    m.close();
    assert_eq!(m, MenuState::closed());
    m.close();
    assert_eq!(m, MenuState::closed());
}

#[test]
fn accordion_opens_one_item_at_a_time() {
    let mut acc = Accordion::new(4);
    assert!(acc.active().is_none());

    acc.click(1);
    assert_eq!(acc.active(), Some(1));

    acc.click(3);
    assert_eq!(acc.active(), Some(3));
    assert!(!acc.is_active(1));
    assert_eq!(acc.active_count(), 1);
}

#[test]
fn clicking_open_item_closes_it() {
    let mut acc = Accordion::new(3);
    acc.click(2);
    acc.click(2);
    assert_eq!(acc.active_count(), 0);
}

#[test]
fn any_click_leaves_at_most_one_open() {
    // Markup may ship with several items open.
    let start = [true, false, true, true];
    for clicked in 0..start.len() {
        let mut acc = Accordion::from_flags(&start);
        acc.click(clicked);
        assert!(acc.active_count() <= 1, "click {clicked}");
        assert_eq!(acc.is_active(clicked), !start[clicked]);
    }
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut acc = Accordion::from_flags(&[false, true]);
    acc.click(5);
    assert_eq!(acc.active(), Some(1));
    assert!(!acc.is_active(5));

    let mut empty = Accordion::new(0);
    empty.click(0);
    assert!(empty.is_empty());
}

#[test]
fn navbar_condenses_strictly_past_threshold() {
    assert!(!navbar_condensed(0.0));
    assert!(!navbar_condensed(50.0));
    assert!(navbar_condensed(50.5));
    assert!(navbar_condensed(1200.0));
}
