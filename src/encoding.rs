use percent_encoding::{utf8_percent_encode, AsciiSet};

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value the way OAuth 1.0 expects.
///
/// This is form URL-encoding with `~` left literal and spaces written as
/// `%20` instead of `+`. Empty input stays empty and `"0"` passes through.
pub fn escape(input: &str) -> String {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS).to_string()
}
