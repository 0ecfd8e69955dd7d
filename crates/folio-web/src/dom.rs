//! DOM implementations of the core's collaborator seams: positioned label
//! elements addressed by anchor name, the idle hint element, and navigation.

use crate::constants::HINT_ID;
use fnv::FnvHashMap;
use folio_core::{LabelClass, LabelHost, Navigator};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Label host backed by absolutely positioned divs appended to `body`.
pub struct DomLabelHost {
    document: web::Document,
    body: web::HtmlElement,
    labels: FnvHashMap<String, web::HtmlElement>,
    hint: Option<web::Element>,
}

impl DomLabelHost {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let hint = document.get_element_by_id(HINT_ID);
        if hint.is_none() {
            log::warn!("no #{} element; idle hint disabled", HINT_ID);
        }
        Ok(Self {
            document: document.clone(),
            body,
            labels: FnvHashMap::default(),
            hint,
        })
    }

    fn class_name(class: LabelClass) -> &'static str {
        match class {
            LabelClass::Active => "active",
            LabelClass::Hover => "hover",
        }
    }

    fn toggle_hint_class(&self, name: &str, on: bool) {
        if let Some(el) = &self.hint {
            let _ = el.class_list().toggle_with_force(name, on);
        }
    }
}

impl LabelHost for DomLabelHost {
    fn create_label(&mut self, name: &str) {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("create label '{}' failed: {:?}", name, e);
                return;
            }
        };
        el.set_class_name("anchor-label");
        let _ = el.set_attribute("data-anchor", name);
        el.set_text_content(Some(name));
        if let Some(div) = el.dyn_ref::<web::HtmlElement>() {
            let style = div.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("color", "white");
        }
        let _ = self.body.append_child(&el);
        if let Ok(div) = el.dyn_into::<web::HtmlElement>() {
            self.labels.insert(name.to_string(), div);
        }
    }

    fn set_label_position(&mut self, name: &str, x: f32, y: f32) {
        if let Some(el) = self.labels.get(name) {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", x));
            let _ = style.set_property("top", &format!("{}px", y));
        }
    }

    fn set_label_class(&mut self, name: &str, class: LabelClass, on: bool) {
        if let Some(el) = self.labels.get(name) {
            let _ = el.class_list().toggle_with_force(Self::class_name(class), on);
        }
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.toggle_hint_class("show", visible);
    }

    fn set_hint_pulsing(&mut self, pulsing: bool) {
        self.toggle_hint_class("pulse", pulsing);
    }
}

/// Navigates by assigning `window.location`.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open_url(&self, url: &str) {
        if let Some(win) = web::window() {
            if win.location().set_href(url).is_err() {
                log::error!("navigation to {} failed", url);
            }
        }
    }
}
