//! Unit conversion utilities.
//!
//! PresentationML measures lengths in English Metric Units (EMU). Deck
//! programs think in inches and points, so everything converts through here.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Font sizes are written in hundredths of a point (`sz="1200"` is 12pt).
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round() as u32
}

/// Scale `native_width` so that `native_height` maps onto `target_height`.
///
/// Used to place a picture at a fixed height while keeping its aspect ratio.
#[inline]
pub fn scale_width_to_height(native_width: u32, native_height: u32, target_height: i64) -> i64 {
    if native_height == 0 {
        return 0;
    }
    ((native_width as f64) * target_height as f64 / native_height as f64).round() as i64
}
