//! Client-side file downloads
//!
//! Content is offered through a `data:` URL on a temporary anchor.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;

use crate::error::DownloadError;

pub const MIME_MARKDOWN: &str = "text/markdown";
pub const MIME_CSV: &str = "text/csv";
pub const MIME_JSON: &str = "application/json";

/// Characters escaped inside the data URL payload
const DATA_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b',')
    .add(b';');

pub fn data_url(mime: &str, content: &str) -> String {
    format!(
        "data:{};charset=utf-8,{}",
        mime,
        utf8_percent_encode(content, DATA_ENCODE_SET)
    )
}

/// Offer `content` as `file_name`
pub fn download(file_name: &str, mime: &str, content: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument)?;
    let body = document.body().ok_or(DownloadError::NoDocument)?;

    let anchor = document
        .create_element("a")
        .map_err(|e| DownloadError::Dom(format!("{:?}", e)))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Dom("not an anchor".to_string()))?;
    anchor.set_href(&data_url(mime, content));
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| DownloadError::Dom(format!("{:?}", e)))?;
    anchor.click();
    anchor.remove();

    tracing::info!(file = file_name, bytes = content.len(), "download offered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_escapes_structure() {
        let url = data_url(MIME_CSV, "a,b\n\"c\" 100%");
        assert_eq!(url, "data:text/csv;charset=utf-8,a%2Cb%0A%22c%22%20100%25");
    }

    #[test]
    fn test_data_url_keeps_utf8_roundtrippable() {
        let url = data_url(MIME_MARKDOWN, "# Café");
        let payload = url.split_once(',').map(|(_, p)| p).unwrap_or_default();
        let decoded = percent_encoding::percent_decode_str(payload).decode_utf8().unwrap();
        assert_eq!(decoded, "# Café");
    }
}
