use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

/// Decode raw CSV bytes into text.
///
/// UTF-8 first, with any byte order mark removed. Bytes that are not valid
/// UTF-8 are read as Windows-1252, which accepts every byte.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }

    debug!(bytes = bytes.len(), "Input is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(decode_text("Name,City\nJosé,Zürich\n".as_bytes()), "Name,City\nJosé,Zürich\n");
    }

    #[test]
    fn test_bom_is_removed() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Date,Value\n");
        assert_eq!(decode_text(&bytes), "Date,Value\n");
    }

    #[test]
    fn test_latin1_fallback() {
        // "Café" with 0xE9 as a single Windows-1252 byte
        let bytes = [b'C', b'a', b'f', 0xE9, b',', b'1'];
        assert_eq!(decode_text(&bytes), "Café,1");
    }
}
