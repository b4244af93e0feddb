use crate::constants::AOS_GLOBAL;
use js_sys::{Function, Object, Reflect};
use site_core::AosConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Call `AOS.init(options)` if the library is on the page.
///
/// Returns `Ok(false)` when the global is missing; the page still works,
/// elements just don't animate in.
pub fn init(window: &web::Window, cfg: &AosConfig) -> anyhow::Result<bool> {
    let aos = Reflect::get(window, &JsValue::from_str(AOS_GLOBAL)).map_err(js_err)?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(false);
    }
    let init: Function = Reflect::get(&aos, &JsValue::from_str("init"))
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("{}.init is not a function", AOS_GLOBAL))?;

    let opts = Object::new();
    Reflect::set(&opts, &"duration".into(), &JsValue::from(cfg.duration_ms)).map_err(js_err)?;
    Reflect::set(&opts, &"once".into(), &JsValue::from(cfg.once)).map_err(js_err)?;
    Reflect::set(&opts, &"offset".into(), &JsValue::from(cfg.offset_px)).map_err(js_err)?;
    Reflect::set(&opts, &"easing".into(), &JsValue::from_str(cfg.easing)).map_err(js_err)?;

    init.call1(&aos, &opts).map_err(js_err)?;
    Ok(true)
}
