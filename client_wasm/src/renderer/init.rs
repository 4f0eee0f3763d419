use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Find the `<canvas>` element with the given id
pub fn find_canvas(document: &Document, canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))
}

/// Acquire the 2D drawing context of a canvas
pub fn init_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let context: js_sys::Object = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?;

    context
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| JsValue::from_str(&format!("Unexpected 2d context type: {:?}", e)))
}
