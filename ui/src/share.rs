//! Save/share handler for a finished wrap: a plain-text recap on the
//! clipboard plus the slide sequence as a JSON file.

use time::{macros::format_description, OffsetDateTime};
use tracing::info;

use crate::error::WrapError;
use crate::renderers::format_value;
use crate::slides::{SlidePayload, Wrap};

/// Where the JSON copy ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReceipt {
    /// Written to disk (desktop).
    Saved { path: String },
    /// Handed to the browser as a download.
    Downloaded,
}

/// Plain-text recap: the intro title, then one line per recap highlight.
/// Falls back to the slide titles when the wrap has no recap.
pub fn share_text(wrap: &Wrap) -> String {
    let mut lines = Vec::new();

    if let Some(intro) = wrap.iter().find(|slide| matches!(slide.payload, SlidePayload::Intro(_))) {
        lines.push(intro.title.clone());
    }

    let recap = wrap.iter().find_map(|slide| match &slide.payload {
        SlidePayload::Recap(recap) if !recap.highlights.is_empty() => Some(recap),
        _ => None,
    });

    match recap {
        Some(recap) => {
            for highlight in &recap.highlights {
                let value = highlight.text.clone().unwrap_or_else(|| {
                    format_value(highlight.value, highlight.unit, highlight.currency.as_deref())
                });
                lines.push(format!("{}: {value}", highlight.label));
            }
        }
        None => {
            lines.extend(
                wrap.iter()
                    .filter(|slide| !slide.is_structural())
                    .map(|slide| format!("- {}", slide.title)),
            );
        }
    }

    lines.join("\n")
}

/// Copy the recap text and store the wrap as JSON.
pub async fn save_wrap(wrap: Wrap) -> Result<SaveReceipt, WrapError> {
    let json = serde_json::to_string_pretty(wrap.slides())?;
    copy_to_clipboard(share_text(&wrap)).await?;

    let filename = format!("yearwrap-{}.json", timestamp_slug());
    let receipt = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    info!(?receipt, slides = wrap.len(), "wrap saved");
    Ok(receipt)
}

fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!("[year][month][day]_[hour][minute][second]"))
        .unwrap_or_else(|_| "export".into())
}

async fn copy_to_clipboard(payload: String) -> Result<(), WrapError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| WrapError::Clipboard(what.to_string());

        let window = web_sys::window().ok_or_else(|| unavailable("window unavailable"))?;
        let document = window.document().ok_or_else(|| unavailable("document unavailable"))?;
        let body = document.body().ok_or_else(|| unavailable("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(unavailable("copy blocked by the browser"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| WrapError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| WrapError::Clipboard(err.to_string()))
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<SaveReceipt, WrapError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let failed = |what: &str| WrapError::Export(what.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| failed("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| failed("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| failed("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| failed("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| failed("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| failed("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(SaveReceipt::Downloaded)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path)?;
        file.write_all(&bytes)?;
        Ok(SaveReceipt::Saved {
            path: path.to_string_lossy().to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, WrapError> {
    let dirs = directories::ProjectDirs::from("com", "Yearwrap", "Yearwrap")
        .ok_or_else(|| WrapError::Export("unable to determine export directory".into()))?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_wrap, MetricsBundle};

    #[test]
    fn recap_highlights_become_lines() {
        let wrap = build_wrap(&MetricsBundle::sample().unwrap()).unwrap();
        let text = share_text(&wrap);
        let mut lines = text.lines();
        assert_eq!(lines.next(), wrap.get(0).map(|s| s.title.as_str()));
        assert!(text.contains("Revenue: $"));
        assert!(text.contains("Busiest month: "));
    }

    #[test]
    fn falls_back_to_slide_titles_without_recap() {
        let wrap = Wrap::from_json(
            r#"[
                { "id": "a", "type": "intro", "title": "Hello 2024", "payload": {} },
                { "id": "b", "type": "bigNumber", "title": "Orders", "payload": { "value": 3 } },
                { "id": "c", "type": "topList", "title": "Favourites", "payload": {} }
            ]"#,
        )
        .unwrap();
        assert_eq!(share_text(&wrap), "Hello 2024\n- Orders\n- Favourites");
    }

    #[test]
    fn timestamp_slug_is_filename_safe() {
        let slug = timestamp_slug();
        assert!(slug.chars().all(|c| c.is_ascii_digit() || c == '_'));
    }
}
