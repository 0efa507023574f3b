//! Time-to-live values in presentation format.
//!
//! A TTL is either a plain number of seconds or a sequence of numbers each
//! followed by a unit: `w` for weeks, `d` for days, `h` for hours, `m` for
//! minutes, and `s` for seconds, e.g. `1w2d`. Units are case-insensitive.

use super::scan::SyntaxError;

/// The largest TTL allowed, 2^31 - 1 seconds as per RFC 2181.
pub const MAX_TTL: u32 = 0x7FFF_FFFF;

/// Converts the text representation of a TTL into seconds.
pub fn from_text(text: &str) -> Result<u32, SyntaxError> {
    let first = text.bytes().next().ok_or(SyntaxError::BadTtl)?;
    if !first.is_ascii_digit() {
        return Err(SyntaxError::BadTtl);
    }
    let mut total = 0u64;
    let mut current = 0u64;
    let mut need_digit = true;
    for ch in text.bytes() {
        if ch.is_ascii_digit() {
            current = current
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(ch - b'0')))
                .filter(|v| *v <= u64::from(MAX_TTL))
                .ok_or(SyntaxError::BadTtl)?;
            need_digit = false;
        } else {
            if need_digit {
                return Err(SyntaxError::BadTtl);
            }
            let factor = match ch.to_ascii_lowercase() {
                b'w' => 604_800,
                b'd' => 86_400,
                b'h' => 3_600,
                b'm' => 60,
                b's' => 1,
                _ => return Err(SyntaxError::BadTtl),
            };
            total += current * factor;
            current = 0;
            need_digit = true;
        }
    }
    if need_digit {
        // The last thing was a unit.
        current = 0;
    } else if text.bytes().any(|ch| !ch.is_ascii_digit()) {
        // A number without unit after units.
        return Err(SyntaxError::BadTtl);
    }
    total += current;
    u32::try_from(total)
        .ok()
        .filter(|total| *total <= MAX_TTL)
        .ok_or(SyntaxError::BadTtl)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain() {
        assert_eq!(from_text("0"), Ok(0));
        assert_eq!(from_text("3600"), Ok(3600));
        assert_eq!(from_text("2147483647"), Ok(MAX_TTL));
        assert_eq!(from_text("2147483648"), Err(SyntaxError::BadTtl));
    }

    #[test]
    fn units() {
        assert_eq!(from_text("1w"), Ok(604_800));
        assert_eq!(from_text("1W2d3H4m5S"), Ok(788_645));
        assert_eq!(from_text("1h1"), Err(SyntaxError::BadTtl));
        assert_eq!(from_text("h"), Err(SyntaxError::BadTtl));
        assert_eq!(from_text("1hh"), Err(SyntaxError::BadTtl));
        assert_eq!(from_text("1x"), Err(SyntaxError::BadTtl));
        assert_eq!(from_text(""), Err(SyntaxError::BadTtl));
        assert_eq!(from_text("10000w"), Err(SyntaxError::BadTtl));
    }
}
