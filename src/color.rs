//! Hex color helpers.

/// Parse `#rrggbb` (either case) into its three channels.
pub fn parse_hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

pub fn is_hex_color(value: &str) -> bool {
    parse_hex_rgb(value).is_some()
}

/// Scale every channel of `hex` by `percent / 100`, rounding to the nearest
/// integer, and serialize as lowercase `#rrggbb`.
///
/// Returns `None` when `hex` is not `#rrggbb`. Factors above 100 are not
/// clamped: a channel pushed past 255 serializes with more hex digits. The
/// product is kept in `u64`, which holds any `u32` factor exactly.
pub fn darken(hex: &str, percent: u32) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    let scale = |c: u8| (f64::from(c) * f64::from(percent) / 100.0).round() as u64;

    Some(format!(
        "#{:02x}{:02x}{:02x}",
        scale(r),
        scale(g),
        scale(b)
    ))
}
