//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and the D3.js bar chart live in `assets/js/*.js` and are
//! loaded at runtime. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. Data crosses the boundary as JSON strings; map clicks come
//! back through a `wasm_bindgen` closure registered on `window`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the widget JS files at compile time
static LEAFLET_MAP_JS: &str = include_str!("../assets/js/leaflet-map.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Name of the global the map script calls on every click with `(lat, lng)`.
const CLICK_HANDLER_GLOBAL: &str = "__vdmOnMapClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VDM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize widget scripts once Leaflet (`L`) and D3 are both loaded.
///
/// The scripts define functions via `function` declarations; they are
/// evaluated at global scope with an indirect eval once the libraries are
/// ready and then promoted to `window.*`.
pub fn init_widgets() {
    let all_js = [LEAFLET_MAP_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__vdmWidgetScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__vdmWidgetScripts);
                    delete window.__vdmWidgetScripts;
                    if (typeof vdmRenderMap !== 'undefined') window.vdmRenderMap = vdmRenderMap;
                    if (typeof vdmRenderBarChart !== 'undefined') window.vdmRenderBarChart = vdmRenderBarChart;
                    window.__vdmWidgetsReady = true;
                    console.log('VDM widgets initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build a call to `window.<function>` that waits for the widget scripts and
/// the container element before running.
fn call_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let mut literals = vec![js_string(container_id)];
    literals.extend(args.iter().map(|a| js_string(a)));
    let arg_list = literals.join(", ");

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vdmWidgetsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({arg_list});
                    }} catch(e) {{ console.error('[VDM] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = literals[0],
    ));
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Render (or refresh) the destination map.
///
/// `markers_json` is a JSON array of markers; `pending_json` is the pending
/// point as `{"lat", "lng"}` or `null`.
pub fn render_map(container_id: &str, markers_json: &str, pending_json: &str) {
    call_when_ready("vdmRenderMap", container_id, &[markers_json, pending_json]);
}

/// Render the travel mode bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_when_ready("vdmRenderBarChart", container_id, &[data_json, config_json]);
}

/// Register the Rust handler the map calls on every click.
///
/// Registering again replaces the previous handler. The closure is leaked on
/// purpose: it must outlive every map instance.
pub fn register_map_click_handler(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64, f64)>);
    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(
                &window,
                &JsValue::from_str(CLICK_HANDLER_GLOBAL),
                closure.as_ref(),
            )
            .is_err()
            {
                log::error!("Failed to register map click handler");
            }
        }
        None => log::error!("No window available for map click handler"),
    }
    closure.forget();
}
