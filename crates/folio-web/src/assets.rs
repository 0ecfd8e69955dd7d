//! Model asset fetch. Only the completion signal matters to the interaction
//! engine; decoding and GPU upload belong to the renderer.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_model(url: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Err(anyhow::anyhow!("model fetch failed: HTTP {}", resp.status()));
    }
    // Drain the body so the renderer's request hits a warm cache.
    let buf = resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let _ = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
