//! Binary Downloads
//!
//! Saves fetched bytes through a temporary object URL and a synthetic
//! anchor click.

use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const PDF_MIME: &str = "application/pdf";

pub fn report_file_name(date: NaiveDate) -> String {
    format!("YegoSheCan-Platform-Report-{}.pdf", date.format("%Y-%m-%d"))
}

pub fn mentor_report_file_name(date: NaiveDate) -> String {
    format!("YegoSheCan-Mentor-Report-{}.pdf", date.format("%Y-%m-%d"))
}

/// `Certificate-Web-Basics.pdf`
pub fn certificate_file_name(course_name: &str) -> String {
    let slug: Vec<&str> = course_name.split_whitespace().collect();
    if slug.is_empty() {
        "Certificate.pdf".to_string()
    } else {
        format!("Certificate-{}.pdf", slug.join("-"))
    }
}

/// Today's date in the browser's calendar
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn save_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "YegoSheCan-Platform-Report-2025-03-07.pdf");
        assert_eq!(mentor_report_file_name(date), "YegoSheCan-Mentor-Report-2025-03-07.pdf");
    }

    #[test]
    fn test_certificate_file_name() {
        assert_eq!(certificate_file_name("Web  Basics"), "Certificate-Web-Basics.pdf");
        assert_eq!(certificate_file_name(" "), "Certificate.pdf");
    }
}
