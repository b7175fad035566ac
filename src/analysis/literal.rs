//! Go string literal unquoting.

/// Unquote a Go string literal as written in source.
///
/// Accepts interpreted (`"..."`) and raw (`` `...` ``) strings. Returns None
/// when the text is not a well-formed string literal. Byte escapes that do
/// not form valid UTF-8 are replaced with U+FFFD, the same rune Go yields
/// when ranging over such a string.
pub fn unquote(raw: &str) -> Option<String> {
    if raw.len() < 2 {
        return None;
    }

    if let Some(body) = raw.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        if body.contains('`') {
            return None;
        }
        // Carriage returns are discarded from raw strings.
        return Some(body.replace('\r', ""));
    }

    let body = raw.strip_prefix('"')?.strip_suffix('"')?;
    if !body.contains('\\') {
        if body.contains('"') || body.contains('\n') {
            return None;
        }
        return Some(body.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {
                let esc = chars.next()?;
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = take_digits(&mut chars, 2, 16)?;
                        out.push(value as u8);
                    }
                    '0'..='7' => {
                        let rest = take_digits(&mut chars, 2, 8)?;
                        let value = (esc as u32 - '0' as u32) * 64 + rest;
                        if value > 0xff {
                            return None;
                        }
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let width = if esc == 'u' { 4 } else { 8 };
                        let value = take_digits(&mut chars, width, 16)?;
                        let ch = char::from_u32(value)?;
                        push_char(&mut out, ch);
                    }
                    _ => return None,
                }
            }
            other => push_char(&mut out, other),
        }
    }

    Some(String::from_utf8_lossy(&out).into_owned())
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// Consume exactly `count` digits in `radix` and return their value.
fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(value)
}
