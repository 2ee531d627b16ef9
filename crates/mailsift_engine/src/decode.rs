use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub text: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode a response body using: BOM -> Content-Type charset -> chardetng guess.
///
/// Never fails; a page with a few broken bytes can still carry an address.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> DecodedPage {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(['"', '\'']).to_string())
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedPage {
    // `decode` sniffs a BOM itself and reports the encoding it actually used.
    let (text, used, had_errors) = encoding.decode(bytes);
    DecodedPage {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
        lossy: had_errors,
    }
}
