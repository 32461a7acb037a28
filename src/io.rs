//! Layout file export (download) and import (file picker).

use crate::constants::{EXPORT_FILE_NAME, EXPORT_MIME, OBJECT_URL_REVOKE_DELAY_MS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Trigger a browser download of `json` as `sensors.json`.
pub fn download_json(document: &web::Document, json: &str) -> anyhow::Result<()> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(json));
    let options = web::BlobPropertyBag::new();
    options.set_type(EXPORT_MIME);
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    revoke_later(url);
    Ok(())
}

// Revoking in the same task as `click()` can abort the download.
fn revoke_later(url: String) {
    let Some(window) = web::window() else {
        return;
    };
    let revoke = wasm_bindgen::closure::Closure::once_into_js(move || {
        _ = web::Url::revoke_object_url(&url);
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        revoke.unchecked_ref(),
        OBJECT_URL_REVOKE_DELAY_MS,
    );
}

/// A layout file picked by the user, not yet parsed.
pub struct PickedFile {
    pub name: String,
    pub text: String,
}

/// Read the first file selected in `input` as text.
///
/// Returns `Ok(None)` when no file is selected.
pub async fn read_selected_file(input: &web::HtmlInputElement) -> anyhow::Result<Option<PickedFile>> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let name = file.name();
    let text = JsFuture::from(file.text()).await.map_err(js_err)?;
    let text = text
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("{name}: file contents are not text"))?;
    log::info!("[io] read {} bytes from {}", text.len(), name);
    Ok(Some(PickedFile { name, text }))
}
