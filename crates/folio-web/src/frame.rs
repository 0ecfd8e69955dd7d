//! Per-frame driver: builds the tick input from the live window state and
//! runs the engine pipeline on every animation frame.

use crate::dom::DomLabelHost;
use folio_core::{InteractionEngine, TickInput};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic millisecond clock shared by the frame loop and input handlers.
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<InteractionEngine>>,
    pub labels: Rc<RefCell<DomLabelHost>>,
    pub pointer_ndc: Rc<RefCell<Vec2>>,
    pub clock: Rc<FrameClock>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let input = TickInput {
            now_ms: self.clock.now_ms(),
            dt_sec,
            pointer_ndc: *self.pointer_ndc.borrow(),
            viewport_px: viewport_px(),
        };
        let mut labels = self.labels.borrow_mut();
        self.engine.borrow_mut().tick(&input, &mut *labels);
    }
}

/// Window dimensions in pixels, read fresh every frame so label placement
/// tracks resizes without a dedicated listener.
fn viewport_px() -> Vec2 {
    let win = match web::window() {
        Some(w) => w,
        None => return Vec2::ONE,
    };
    let w = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    Vec2::new(w.max(1.0), h.max(1.0))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
