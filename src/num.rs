//! Integer parsing for command arguments.
//!
//! Execute callbacks receive raw token bytes; this is a forgiving `atoi`
//! replacement for them with embedded-shell conventions: `0x` hex, `0o`/
//! leading-zero octal, `0b` binary, optional sign, and a caller-supplied
//! default instead of an error for malformed input.

/// Parse `token` as an integer in `base` (2–36, or 0 to auto-detect from a
/// `0x`/`0o`/`0b`/leading-zero prefix, decimal otherwise). Leading spaces
/// and tabs are skipped; a sign may follow. Any other malformed input —
/// empty digits, a digit outside the base — yields `default`.
pub fn parse_int(token: &[u8], default: i32, base: u32) -> i32 {
    let mut rest = token;
    while let [b' ' | b'\t', tail @ ..] = rest {
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut base = base;
    if let [b'0', tail @ ..] = rest {
        if tail.is_empty() {
            return 0;
        }
        match tail {
            [b'x' | b'X', t @ ..] => {
                base = 16;
                rest = t;
            }
            [b'b' | b'B', t @ ..] => {
                base = 2;
                rest = t;
            }
            [b'o' | b'O', t @ ..] => {
                base = 8;
                rest = t;
            }
            _ => {
                if base == 0 {
                    base = 8;
                }
                rest = tail;
            }
        }
    }
    if base == 0 {
        base = 10;
    }
    if rest.is_empty() || !(2..=36).contains(&base) {
        return default;
    }

    let mut value: i32 = 0;
    for &b in rest {
        let digit = match (b as char).to_digit(base) {
            Some(d) => d as i32,
            None => return default,
        };
        value = match value.checked_mul(base as i32).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        }) {
            Some(v) => v,
            None => return default,
        };
    }
    value
}
