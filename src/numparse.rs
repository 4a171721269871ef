//! Locale-independent numeric text parsing.
//!
//! Every parser either consumes the whole (trimmed) token or hands back the
//! caller's fallback. Partial parses never leak out.
//!
//! Integer tokens use C-style base detection: `0x`/`0X` is hexadecimal, a
//! leading `0` is octal, anything else is decimal. Values outside the target
//! range saturate; a `-` on an unsigned token negates modulo 2^64.

use crate::wide::WideString;

const TRAILING: [char; 4] = [' ', '\n', '\r', '\t'];

fn trim_right(text: &str) -> &str {
    text.trim_end_matches(TRAILING)
}

// isspace() in the C locale
fn skip_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Unsigned magnitude of `digits`, plus whether it overflowed `u64`.
/// `None` when there are no digits or any character is left over.
fn parse_magnitude(digits: &str) -> Option<(u64, bool)> {
    let (radix, body) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16u32, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    if body.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    let mut overflow = false;
    for c in body.chars() {
        let d = c.to_digit(radix)?;
        match value.checked_mul(u64::from(radix)).and_then(|v| v.checked_add(u64::from(d))) {
            Some(v) => value = v,
            None => overflow = true,
        }
    }
    Some((value, overflow))
}

pub fn str_to_i64(text: &str, fallback: i64) -> i64 {
    let (negative, digits) = split_sign(skip_leading(trim_right(text)));
    let Some((magnitude, overflow)) = parse_magnitude(digits) else {
        return fallback;
    };
    if negative {
        if overflow || magnitude > i64::MIN.unsigned_abs() {
            i64::MIN
        } else {
            (magnitude as i64).wrapping_neg()
        }
    } else if overflow || magnitude > i64::MAX as u64 {
        i64::MAX
    } else {
        magnitude as i64
    }
}

pub fn str_to_u64(text: &str, fallback: u64) -> u64 {
    let (negative, digits) = split_sign(skip_leading(trim_right(text)));
    let Some((magnitude, overflow)) = parse_magnitude(digits) else {
        return fallback;
    };
    if overflow {
        u64::MAX
    } else if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// `0x` mantissa with optional fraction digits and binary `p` exponent.
/// `digits` carries no sign.
fn parse_hex_float(digits: &str) -> Option<f64> {
    let body = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X"))?;
    let (mantissa, exponent) = match body.find(['p', 'P']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut value = 0f64;
    for c in whole.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1f64 / 16.0;
    for c in fraction.chars() {
        value += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    if let Some(exp) = exponent {
        let (negative, exp_digits) = split_sign(exp);
        if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude = exp_digits.parse::<i32>().unwrap_or(i32::MAX);
        value *= 2f64.powi(if negative { -magnitude } else { magnitude });
    }
    Some(value)
}

/// Decimal and exponent forms, `0x` hexadecimal forms, plus `inf`,
/// `infinity` and `nan`.
pub fn str_to_f64(text: &str, fallback: f64) -> f64 {
    let body = skip_leading(trim_right(text));
    if body.is_empty() {
        return fallback;
    }
    let (negative, digits) = split_sign(body);
    if digits.starts_with("0x") || digits.starts_with("0X") {
        return match parse_hex_float(digits) {
            Some(value) if negative => -value,
            Some(value) => value,
            None => fallback,
        };
    }
    body.parse::<f64>().unwrap_or(fallback)
}

// Numeric tokens are pure ASCII, so lossy decoding never changes the outcome.

pub fn wide_to_i64(text: &WideString, fallback: i64) -> i64 {
    str_to_i64(&text.to_string_lossy(), fallback)
}

pub fn wide_to_u64(text: &WideString, fallback: u64) -> u64 {
    str_to_u64(&text.to_string_lossy(), fallback)
}

pub fn wide_to_f64(text: &WideString, fallback: f64) -> f64 {
    str_to_f64(&text.to_string_lossy(), fallback)
}
