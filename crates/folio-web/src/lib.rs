#![cfg(target_arch = "wasm32")]
//! WASM entry point: builds the interaction engine, wires DOM events, kicks
//! off the model fetch, and starts the per-frame tick loop. The 3D renderer
//! runs alongside and owns the canvas; this crate drives everything the
//! hotspot labels and hint need.

pub mod assets;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;

use constants::{CANVAS_ID, MODEL_URL, STARFIELD_SEED};
use folio_core::{
    default_rules, InteractionEngine, DEFAULT_ANCHOR_POSITIONS, DEFAULT_LINKS,
    INITIAL_ACTIVE_ANCHORS, MODEL_PICK_RADIUS, MODEL_PROXY_COLOR, STAR_COUNT,
};
use glam::{Vec2, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        dom::sync_canvas_backing_size(&canvas);
        events::wire_resize(&canvas);
    } else {
        log::warn!("no #{} canvas; renderer wiring skipped", CANVAS_ID);
    }

    let clock = Rc::new(frame::FrameClock::new());
    let labels = Rc::new(RefCell::new(dom::DomLabelHost::new(&document)?));

    let mut engine = InteractionEngine::new(
        default_rules(),
        &DEFAULT_LINKS,
        INITIAL_ACTIVE_ANCHORS,
        clock.now_ms(),
    );
    {
        let mut labels = labels.borrow_mut();
        for (name, pos) in DEFAULT_ANCHOR_POSITIONS {
            engine
                .register_anchor(&mut *labels, name, Vec3::from(pos))
                .map_err(|e| anyhow::anyhow!("anchor setup: {}", e))?;
        }
    }
    engine.scene.scatter_stars(STAR_COUNT, STARFIELD_SEED);
    let engine = Rc::new(RefCell::new(engine));

    let pointer_ndc = Rc::new(RefCell::new(Vec2::ZERO));
    events::wire_pointer_handlers(engine.clone(), pointer_ndc.clone());
    events::wire_activity_handlers(engine.clone(), clock.clone());

    // Model load completion force-activates the initial label subset; failure
    // is logged and the labels simply stay inactive.
    {
        let engine = engine.clone();
        let labels = labels.clone();
        spawn_local(async move {
            match assets::fetch_model(MODEL_URL).await {
                Ok(()) => {
                    let mut eng = engine.borrow_mut();
                    // proxy sphere so pointer rays can hit the model body
                    eng.scene
                        .add_decor(Vec3::ZERO, MODEL_PICK_RADIUS, MODEL_PROXY_COLOR);
                    eng.on_model_loaded(&mut *labels.borrow_mut());
                    log::info!("model loaded");
                }
                Err(e) => log::error!("model load failed: {:?}", e),
            }
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        labels,
        pointer_ndc,
        clock,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
