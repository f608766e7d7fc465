//! Percent-encoding helpers shared by the grammar and the query parser.

use crate::error::ArgsError;

/// Returns true if the character is left untouched by the WHATWG `encodeURI`
/// algorithm: ASCII alphanumerics plus the reserved and unreserved marks.
///
/// An identifier is syntactically acceptable only if it consists entirely of
/// such characters, i.e. encoding it again would be a no-op. Anything else
/// (whitespace, `%`, control characters, non-ASCII) means the identifier was
/// pasted unescaped or truncated mid-escape.
pub(crate) const fn is_uri_transparent_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ';' | ','
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
                | '+'
                | '$'
                | '-'
                | '_'
                | '.'
                | '!'
                | '~'
                | '*'
                | '\''
                | '('
                | ')'
                | '#'
        )
}

/// Returns the first character that would be altered by `encodeURI`, if any.
pub(crate) fn find_opaque_char(input: &str) -> Option<(usize, char)> {
    input
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_uri_transparent_char(c))
}

/// Decodes `%XX` escapes in a query component, interpreting the result as
/// UTF-8. Characters outside escapes pass through unchanged.
pub(crate) fn percent_decode(value: &str) -> Result<String, ArgsError> {
    let mut bytes = Vec::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() != 2 {
                return Err(ArgsError::InvalidPercentEncoding {
                    value: value.to_string(),
                });
            }
            let byte = u8::from_str_radix(&hex, 16).map_err(|_| {
                ArgsError::InvalidPercentEncoding {
                    value: value.to_string(),
                }
            })?;
            bytes.push(byte);
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8(bytes).map_err(|_| ArgsError::InvalidPercentEncoding {
        value: value.to_string(),
    })
}

/// Encodes a query component the way `encodeURIComponent` does: ASCII
/// alphanumerics and `-_.!~*'()` pass through, everything else becomes
/// UTF-8 `%XX` escapes.
pub(crate) fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')') {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
