//! Display-name decoding for scanned entries.
//!
//! The host enumerates paths percent-encoded. Names are decoded with
//! standard percent-decoding; when that fails (malformed escape or invalid
//! UTF-8), a fixed table of safe escapes is substituted literally and any
//! other `%XX` sequence is left alone.

/// Escapes substituted when standard decoding fails.
const KNOWN_ESCAPES: &[(&str, &str)] = &[
    ("%20", " "),
    ("%21", "!"),
    ("%23", "#"),
    ("%24", "$"),
    ("%26", "&"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2B", "+"),
    ("%2C", ","),
    ("%2D", "-"),
    ("%2E", "."),
    ("%3D", "="),
    ("%40", "@"),
    ("%5B", "["),
    ("%5D", "]"),
];

/// Decode a scanned name for display. Never fails.
pub fn decode_display_name(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_string();
    }

    if has_well_formed_escapes(raw)
        && let Ok(decoded) = urlencoding::decode(raw)
    {
        return decoded.into_owned();
    }

    decode_known_escapes(raw)
}

/// Every `%` must be followed by two hex digits.
fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

fn decode_known_escapes(raw: &str) -> String {
    KNOWN_ESCAPES
        .iter()
        .fold(raw.to_string(), |name, (escape, literal)| {
            name.replace(escape, literal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(decode_display_name("Lower Third.aep"), "Lower Third.aep");
        assert_eq!(decode_display_name(""), "");
    }

    #[test]
    fn test_standard_decoding() {
        assert_eq!(decode_display_name("Lower%20Third.aep"), "Lower Third.aep");
        assert_eq!(decode_display_name("caf%C3%A9.aep"), "café.aep");
        assert_eq!(decode_display_name("a%2fb"), "a/b");
    }

    #[test]
    fn test_malformed_escape_falls_back_to_table() {
        // `%ZZ` is malformed, so only known escapes are replaced
        assert_eq!(decode_display_name("100%ZZ%20off"), "100%ZZ off");
        assert_eq!(decode_display_name("50%"), "50%");
        assert_eq!(decode_display_name("%28v2%29%"), "(v2)%");
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_table() {
        assert_eq!(decode_display_name("%FF%20clip"), "%FF clip");
    }

    #[test]
    fn test_unknown_escapes_left_untouched_in_fallback() {
        assert_eq!(decode_display_name("%7E%20%"), "%7E %");
    }
}
