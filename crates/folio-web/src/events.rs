//! Event wiring: pointer tracking and clicks, the wheel/arrow-key activity
//! inputs that feed the idle-hint machine, and window resize.

use crate::dom::{self, WindowNavigator};
use crate::frame::FrameClock;
use folio_core::InteractionEngine;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map client pixel coordinates to pointer NDC, y-up in [-1, 1].
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (client_x / width.max(1.0)) * 2.0 - 1.0,
        -(client_y / height.max(1.0)) * 2.0 + 1.0,
    )
}

fn window_size() -> (f32, f32) {
    let win = match web::window() {
        Some(w) => w,
        None => return (1.0, 1.0),
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
    (w, h)
}

pub fn wire_pointer_handlers(
    engine: Rc<RefCell<InteractionEngine>>,
    pointer_ndc: Rc<RefCell<Vec2>>,
) {
    // pointermove: latest-value-wins NDC plus the parallax shift
    {
        let engine = engine.clone();
        let pointer_ndc = pointer_ndc.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (w, h) = window_size();
            let ndc = client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, w, h);
            *pointer_ndc.borrow_mut() = ndc;
            // parallax tracks the raw y-down client mapping
            engine.borrow_mut().set_parallax(Vec2::new(ndc.x, -ndc.y));
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = web::window() {
            let _ = win
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // click: route the nearest hit to its URL
    {
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            let ndc = *pointer_ndc.borrow();
            engine.borrow().click(ndc, &WindowNavigator);
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = web::window() {
            let _ = win.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

pub fn wire_activity_handlers(engine: Rc<RefCell<InteractionEngine>>, clock: Rc<FrameClock>) {
    // wheel
    {
        let engine = engine.clone();
        let clock = clock.clone();
        let closure = Closure::wrap(Box::new(move |_: web::WheelEvent| {
            engine.borrow_mut().note_input(clock.now_ms());
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = web::window() {
            let _ = win.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // arrow keys
    {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            match ev.key().as_str() {
                "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" => {
                    engine.borrow_mut().note_input(clock.now_ms());
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = web::window() {
            let _ =
                win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Keep the canvas backing store in sync with its CSS size; the tick itself
/// re-reads the window dimensions every frame.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
