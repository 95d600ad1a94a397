//! Decodes the raw source bytes of a numeric or string token into the value
//! and format it actually denotes. Grounded in the VM's constant-folding
//! helpers (`unescape_string`, `parse_integer_literal` in the emitter) but
//! promoted out of the compiler so the parser can attach decoded literals
//! directly to `Expr::Integer` / `Expr::Float` / `Expr::String` nodes.

use serde::Serialize;

/// How a literal was spelled in the source. Carried on the AST node so a
/// formatter can reprint `0x1F` as `0x1F` rather than `31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiteralFormat {
    Decimal,
    Binary,
    Octal,
    Hex,
    FloatingPoint,
    ExpSmall,
    ExpBig,
    Single,
    Double,
}

/// Outcome of decoding an integer literal. PHP silently promotes an integer
/// literal that overflows the platform integer range to a float, so decoding
/// an `T_LNUMBER` can still yield a floating point value.
pub enum IntegerLiteral {
    Int(i64),
    Overflowed(f64),
}

/// Strips underscores (PHP 7.4 numeric literal separators are not part of
/// PHP 7 grammar, but the lexer already accepts plain digit runs; this just
/// guards any stray whitespace captured by the caller).
fn digits_only(text: &[u8]) -> std::vec::Vec<u8> {
    text.iter().copied().filter(|b| *b != b'_').collect()
}

/// Decodes an `T_LNUMBER` token's source text into its format and value.
/// `text` is the raw slice as it appeared in source (e.g. `b"0x1F"`).
pub fn decode_integer(text: &[u8]) -> (LiteralFormat, IntegerLiteral) {
    let text = digits_only(text);

    if text.len() > 1 && text[0] == b'0' && (text[1] == b'x' || text[1] == b'X') {
        return decode_radix_integer(&text[2..], 16, LiteralFormat::Hex);
    }
    if text.len() > 1 && text[0] == b'0' && (text[1] == b'b' || text[1] == b'B') {
        return decode_radix_integer(&text[2..], 2, LiteralFormat::Binary);
    }
    if text.len() > 1 && text[0] == b'0' && (text[1] == b'o' || text[1] == b'O') {
        return decode_radix_integer(&text[2..], 8, LiteralFormat::Octal);
    }
    if text.len() > 1 && text[0] == b'0' && text[1].is_ascii_digit() {
        return decode_radix_integer(&text[1..], 8, LiteralFormat::Octal);
    }

    match std::str::from_utf8(&text).ok().and_then(|s| s.parse::<i64>().ok()) {
        Some(value) => (LiteralFormat::Decimal, IntegerLiteral::Int(value)),
        None => {
            let value = std::str::from_utf8(&text)
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(f64::INFINITY);
            (LiteralFormat::Decimal, IntegerLiteral::Overflowed(value))
        }
    }
}

/// Decodes a non-decimal integer literal's digits (without the `0x`/`0b`/`0o`
/// prefix). Promotes to float using the same "too many significant digits"
/// heuristic PHP's lexer applies: 16 or more hex digits, or enough binary
/// digits to exceed 63 bits, cannot fit in an `i64` and are re-parsed as a
/// float of the same radix instead of overflowing silently.
fn decode_radix_integer(digits: &[u8], radix: u32, format: LiteralFormat) -> (LiteralFormat, IntegerLiteral) {
    let text = match std::str::from_utf8(digits) {
        Ok(s) => s,
        Err(_) => return (format, IntegerLiteral::Int(0)),
    };

    match i64::from_str_radix(text, radix) {
        Ok(value) => (format, IntegerLiteral::Int(value)),
        Err(_) => {
            let mut value = 0f64;
            for &b in digits {
                let digit = (b as char).to_digit(radix).unwrap_or(0) as f64;
                value = value * radix as f64 + digit;
            }
            (format, IntegerLiteral::Overflowed(value))
        }
    }
}

/// Decodes an `T_DNUMBER` token's source text into its format and value.
pub fn decode_float(text: &[u8]) -> (LiteralFormat, f64) {
    let text = digits_only(text);
    let format = if text.iter().any(|b| *b == b'E') {
        LiteralFormat::ExpBig
    } else if text.iter().any(|b| *b == b'e') {
        LiteralFormat::ExpSmall
    } else {
        LiteralFormat::FloatingPoint
    };
    let value = std::str::from_utf8(&text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    (format, value)
}

/// Quote style of a simple (non-interpolated) string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringQuote {
    Single,
    Double,
    Backtick,
    Heredoc,
}

impl From<StringQuote> for LiteralFormat {
    fn from(quote: StringQuote) -> LiteralFormat {
        match quote {
            StringQuote::Single => LiteralFormat::Single,
            StringQuote::Double | StringQuote::Backtick | StringQuote::Heredoc => LiteralFormat::Double,
        }
    }
}

/// Unescapes a string literal body (quotes/backticks/heredoc label already
/// stripped by the caller). Single-quoted strings only recognize `\\` and
/// `\'`; every other quote style recognizes the full escape set including
/// octal, hex, and Unicode code point escapes.
pub fn decode_string(body: &[u8], quote: StringQuote) -> std::vec::Vec<u8> {
    if quote == StringQuote::Single {
        return decode_single_quoted(body);
    }

    let mut out = std::vec::Vec::with_capacity(body.len());
    let mut chars = body.iter().copied().peekable();

    while let Some(b) = chars.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match chars.peek().copied() {
            Some(b'n') => {
                chars.next();
                out.push(b'\n');
            }
            Some(b'r') => {
                chars.next();
                out.push(b'\r');
            }
            Some(b't') => {
                chars.next();
                out.push(b'\t');
            }
            Some(b'v') => {
                chars.next();
                out.push(0x0b);
            }
            Some(b'f') => {
                chars.next();
                out.push(0x0c);
            }
            Some(b'e') => {
                chars.next();
                out.push(0x1b);
            }
            Some(b'\\') => {
                chars.next();
                out.push(b'\\');
            }
            Some(b'$') => {
                chars.next();
                out.push(b'$');
            }
            Some(b'"') => {
                chars.next();
                out.push(b'"');
            }
            Some(b'x') => {
                chars.next();
                let mut hex = std::vec::Vec::with_capacity(2);
                while hex.len() < 2 {
                    match chars.peek().copied() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            hex.push(c);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                if hex.is_empty() {
                    out.push(b'\\');
                    out.push(b'x');
                } else {
                    let text = std::str::from_utf8(&hex).unwrap();
                    out.push(u8::from_str_radix(text, 16).unwrap_or(0));
                }
            }
            Some(b'u') => {
                // \u{...} code point escape. Bare \u without `{` is literal.
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.peek().copied() == Some(b'{') {
                    chars.next();
                    chars.next();
                    decode_unicode_escape(&mut chars, &mut out);
                } else {
                    chars.next();
                    out.push(b'\\');
                    out.push(b'u');
                }
            }
            Some(c) if c.is_ascii_digit() && c < b'8' => {
                let mut octal = std::vec::Vec::with_capacity(3);
                while octal.len() < 3 {
                    match chars.peek().copied() {
                        Some(d) if (b'0'..=b'7').contains(&d) => {
                            octal.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let text = std::str::from_utf8(&octal).unwrap();
                let value = u32::from_str_radix(text, 8).unwrap_or(0) & 0xFF;
                out.push(value as u8);
            }
            _ => {
                out.push(b'\\');
            }
        }
    }

    out
}

/// Decodes the body of a `\u{HEX}` escape (the cursor is positioned right
/// after the opening brace) and appends the UTF-8 encoding of the resulting
/// code point. Malformed escapes are pushed back verbatim.
fn decode_unicode_escape(
    chars: &mut std::iter::Peekable<impl Iterator<Item = u8> + Clone>,
    out: &mut std::vec::Vec<u8>,
) {
    let mut hex = std::vec::Vec::new();
    while let Some(c) = chars.peek().copied() {
        if c == b'}' {
            break;
        }
        if c.is_ascii_hexdigit() {
            hex.push(c);
            chars.next();
        } else {
            break;
        }
    }
    let closed = chars.peek().copied() == Some(b'}');
    if closed {
        chars.next();
    }

    let code_point = std::str::from_utf8(&hex)
        .ok()
        .and_then(|s| u32::from_str_radix(s, 16).ok());

    match code_point.and_then(char::from_u32) {
        Some(ch) if closed => {
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
        _ => {
            out.push(b'\\');
            out.push(b'u');
            out.push(b'{');
            out.extend_from_slice(&hex);
            if closed {
                out.push(b'}');
            }
        }
    }
}

fn decode_single_quoted(body: &[u8]) -> std::vec::Vec<u8> {
    let mut out = std::vec::Vec::with_capacity(body.len());
    let mut chars = body.iter().copied().peekable();
    while let Some(b) = chars.next() {
        if b == b'\\' {
            match chars.peek().copied() {
                Some(b'\\') => {
                    chars.next();
                    out.push(b'\\');
                }
                Some(b'\'') => {
                    chars.next();
                    out.push(b'\'');
                }
                _ => out.push(b'\\'),
            }
        } else {
            out.push(b);
        }
    }
    out
}
