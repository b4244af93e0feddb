use crate::dom;
use site_core::{cursor_transform, line_transform, PointerLoop, ScrollLine, TileRect, TiltPose};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` driver for one component.
///
/// `body` runs once per granted frame and returns whether it wants another
/// one. At most one request is outstanding; dropping the scheduler cancels it.
/// `on_failed` runs whenever the browser refuses a request, so callers that
/// track their own pending flag can clear it.
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

struct SchedulerInner {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    on_failed: Box<dyn Fn()>,
}

impl FrameScheduler {
    pub fn new(
        mut body: impl FnMut(f64) -> bool + 'static,
        on_failed: impl Fn() + 'static,
    ) -> Self {
        let inner = Rc::new(SchedulerInner {
            pending: Cell::new(None),
            callback: RefCell::new(None),
            on_failed: Box::new(on_failed),
        });
        let weak: Weak<SchedulerInner> = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if body(timestamp) {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(tick);
        Self { inner }
    }

    #[inline]
    pub fn request(&self) {
        self.inner.request();
    }
}

impl SchedulerInner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let requested = match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(tick)) => w
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .map_err(|e| log::warn!("[frame] requestAnimationFrame failed: {:?}", e))
                .ok(),
            _ => None,
        };
        match requested {
            Some(id) => self.pending.set(Some(id)),
            None => (self.on_failed)(),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

pub struct ParallaxFrame {
    pub window: web::Window,
    pub state: Rc<RefCell<PointerLoop>>,
    pub cursor: Option<web::HtmlElement>,
    pub cursor_dot: Option<web::HtmlElement>,
    pub tiles: Rc<Vec<web::HtmlElement>>,
}

impl ParallaxFrame {
    /// One cursor + tilt update. Returns whether the pointer is still moving.
    pub fn frame(&self) -> bool {
        let out = self.state.borrow_mut().frame();

        if let (Some(cursor), Some(dot)) = (&self.cursor, &self.cursor_dot) {
            let t = cursor_transform(out.cursor);
            dom::set_style(cursor, "transform", &t);
            dom::set_style(dot, "transform", &t);
        }

        let vh = dom::viewport_height(&self.window);
        for (i, tile) in self.tiles.iter().enumerate() {
            let r = tile.get_bounding_client_rect();
            let rect = TileRect {
                left: r.left() as f32,
                top: r.top() as f32,
                width: r.width() as f32,
                height: r.height() as f32,
            };
            if !rect.in_viewport(vh) {
                continue;
            }
            let pose = TiltPose::toward(out.pointer, &rect, i);
            dom::set_style(tile, "transform", &pose.to_css());
        }

        out.reschedule
    }
}

pub struct ScrollLineFrame {
    pub window: web::Window,
    pub state: Rc<RefCell<ScrollLine>>,
    pub line: web::HtmlElement,
}

impl ScrollLineFrame {
    pub fn frame(&self) {
        let r = self.line.get_bounding_client_rect();
        let vh = dom::viewport_height(&self.window);
        let offset = self
            .state
            .borrow_mut()
            .frame(vh, r.top() as f32, r.height() as f32);
        dom::set_style(&self.line, "transform", &line_transform(offset));
        log::trace!("[line] top={:.0} offset={:.0}px", r.top(), offset);
    }
}
