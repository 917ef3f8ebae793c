//! Export utilities for browser downloads
//!
//! Two artifacts leave the page: a PNG raster of the flowchart SVG and a
//! plain-text steps document synthesized from already-fetched data. Both
//! are best-effort conveniences: failures are logged, never surfaced as a
//! crash.

use pathboard_types::RoadmapRecord;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement, Url};

/// Render the roadmap's steps as a downloadable plain-text document
///
/// Pure synthesis from the fetched record - no network call involved.
pub fn build_steps_document(record: &RoadmapRecord) -> String {
    let mut doc = String::new();

    doc.push_str(&record.title);
    doc.push('\n');
    doc.push_str(&"=".repeat(record.title.chars().count().max(8)));
    doc.push_str("\n\n");

    if !record.description.is_empty() {
        doc.push_str(&record.description);
        doc.push_str("\n\n");
    }

    doc.push_str(&format!("Difficulty: {}\n", record.difficulty));
    if let Some(time) = &record.estimated_time {
        doc.push_str(&format!("Estimated time: {}\n", time));
    }
    if !record.technologies.is_empty() {
        doc.push_str(&format!("Technologies: {}\n", record.technologies.join(", ")));
    }
    doc.push('\n');

    doc.push_str("Learning Steps\n--------------\n");
    for (index, step) in record.steps.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", index + 1, step.title));
        if let Some(description) = &step.description {
            doc.push_str(&format!("   {}\n", description));
        }
        for resource in &step.resources {
            doc.push_str(&format!("   - {}\n", resource));
        }
    }

    doc
}

/// Download the steps document for a roadmap
pub fn export_steps_document(record: &RoadmapRecord) {
    let doc = build_steps_document(record);
    let filename = format!("{}-steps.txt", record.id);
    if let Err(err) = trigger_download(&doc, &filename, "text/plain") {
        leptos::logging::warn!("steps export failed: {:?}", err);
    }
}

/// Rasterize an SVG element to PNG and trigger a browser download
///
/// The SVG is serialized to a utf-8 data URL, decoded into an image, drawn
/// onto an offscreen canvas and read back as PNG. A tainted canvas or any
/// other failure is logged at the call site.
pub fn export_svg_as_png(svg_dom_id: &str, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let svg = document
        .get_element_by_id(svg_dom_id)
        .ok_or_else(|| JsValue::from_str("flowchart svg not found"))?;

    let rect = svg.get_bounding_client_rect();
    let width = if rect.width() > 0.0 { rect.width() } else { 800.0 } as u32;
    let height = if rect.height() > 0.0 { rect.height() } else { 600.0 } as u32;

    let xml = web_sys::XmlSerializer::new()?.serialize_to_string(&svg)?;
    let encoded: String = js_sys::encode_uri_component(&xml).into();
    let data_url = format!("data:image/svg+xml;charset=utf-8,{}", encoded);

    let image = HtmlImageElement::new()?;
    let image_in_closure = image.clone();
    let png_name = format!("{}.png", filename);

    let on_load = Closure::once(move || {
        if let Err(err) = rasterize(&image_in_closure, width, height, &png_name) {
            leptos::logging::warn!("flowchart export failed: {:?}", err);
        }
    });
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    image.set_src(&data_url);
    Ok(())
}

fn rasterize(
    image: &HtmlImageElement,
    width: u32,
    height: u32,
    filename: &str,
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    context.set_fill_style_str("#ffffff");
    context.fill_rect(0.0, 0.0, width as f64, height as f64);
    context.draw_image_with_html_image_element(image, 0.0, 0.0)?;

    // Throws on a canvas tainted by cross-origin images
    let png_url = canvas.to_data_url_with_type("image/png")?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&png_url);
    anchor.set_download(filename);
    anchor.click();

    Ok(())
}

/// Trigger browser download via Blob and temporary anchor element
fn trigger_download(content: &str, filename: &str, mime_type: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(mime_type);

    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathboard_types::StepRecord;

    #[test]
    fn test_steps_document_layout() {
        let record = RoadmapRecord {
            id: "frontend".to_string(),
            title: "Frontend".to_string(),
            description: "Browser-side development".to_string(),
            content: None,
            difficulty: "medium".to_string(),
            estimated_time: Some("6 weeks".to_string()),
            technologies: vec!["HTML".to_string(), "CSS".to_string()],
            steps: vec![
                StepRecord {
                    title: "Learn HTML".to_string(),
                    description: Some("Semantics first".to_string()),
                    resources: vec!["MDN".to_string()],
                },
                StepRecord {
                    title: "Learn CSS".to_string(),
                    description: None,
                    resources: vec![],
                },
            ],
            rating: 0.0,
            enrolled_count: 0,
            image: None,
            flowchart_data: None,
        };

        let doc = build_steps_document(&record);

        assert!(doc.starts_with("Frontend\n"));
        assert!(doc.contains("Estimated time: 6 weeks"));
        assert!(doc.contains("Technologies: HTML, CSS"));
        assert!(doc.contains("1. Learn HTML"));
        assert!(doc.contains("   Semantics first"));
        assert!(doc.contains("   - MDN"));
        assert!(doc.contains("2. Learn CSS"));
    }
}
