//! Charset sniffing and transcoding of fetched page bytes.
//!
//! Pages arrive as raw bytes from the fetch layer. The declared charset is
//! read from the head of the document and the bytes are decoded to UTF-8
//! with invalid sequences replaced, so decoding itself never fails.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes inspected for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">`, then `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATIONS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("meta charset regex"),
        Regex::new(
            r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
        )
        .expect("content-type charset regex"),
    ]
});

/// Every charset label declared in the first bytes of the page, in lookup order.
fn declarations(html: &[u8]) -> Vec<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    CHARSET_DECLARATIONS
        .iter()
        .filter_map(|re| re.captures(&head)?.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Returns the first charset label declared in the first bytes of the page, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    declarations(html).into_iter().next()
}

/// Resolves the page encoding.
///
/// A label `encoding_rs` does not know falls through to the next
/// declaration, then to UTF-8. UTF-16 and replacement labels resolve to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    declarations(html)
        .iter()
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decodes page bytes to UTF-8 text.
///
/// # Examples
///
/// ```
/// use snippet_extract::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html);
    }
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passthrough_borrows() {
        let html = b"<html><body>Hello</body></html>";
        assert!(matches!(decode_html(html), Cow::Borrowed(_)));
    }

    #[test]
    fn meta_charset_is_honoured() {
        let html = br#"<html><head><meta charset="windows-1252"></head><body>x</body></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn content_type_charset_is_honoured() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=GBK">"#;
        assert_eq!(declared_charset(html), Some("GBK".to_string()));
        assert_eq!(detect_encoding(html).name(), "GBK");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn utf16_label_is_read_as_utf8() {
        let html = br#"<meta charset="utf-16"><p>plain text</p>"#;
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(decode_html(html).contains("plain text"));
    }

    #[test]
    fn replacement_label_is_read_as_utf8() {
        let html = br#"<meta charset="iso-2022-kr"><p>plain text</p>"#;
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(decode_html(html).contains("plain text"));
    }

    #[test]
    fn unknown_meta_charset_falls_through_to_content_type() {
        let html = br#"<meta charset="bogus"><meta http-equiv="Content-Type" content="text/html; charset=GBK">"#;
        assert_eq!(declared_charset(html), Some("bogus".to_string()));
        assert_eq!(detect_encoding(html).name(), "GBK");
    }

    #[test]
    fn declaration_past_sniff_limit_is_ignored() {
        let mut html = vec![b' '; SNIFF_LIMIT];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(declared_charset(&html), None);
    }

    #[test]
    fn gbk_bytes_decode_to_chinese() {
        // "中文" in GBK
        let mut html = br#"<meta charset="gbk"><p>"#.to_vec();
        html.extend_from_slice(&[0xD6, 0xD0, 0xCE, 0xC4]);
        assert!(decode_html(&html).contains("中文"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let html = b"<body>Test \xFF\xFE Invalid</body>";
        let text = decode_html(html);
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
    }
}
