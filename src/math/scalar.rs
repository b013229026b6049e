//! Scalar helpers: layer masks, decimal truncation and mirroring.

/// Mask with every layer bit set.
pub const LAYER_MASK_ALL: i32 = !0;

/// Mask with no layer bit set.
pub const LAYER_MASK_NONE: i32 = 0;

/// Returns `true` if `mask` has the bit for `layer` set.
///
/// `layer` is a bit index (0..32), not a pre-shifted bit. Out-of-range
/// layers are never included.
#[must_use]
pub fn mask_includes(mask: i32, layer: u32) -> bool {
    1_i32
        .checked_shl(layer)
        .is_some_and(|bit| mask & bit == bit)
}

/// Truncates `value` towards zero to `decimals` decimal places.
///
/// `1.19` with one decimal gives `1.1`; no rounding is applied.
#[must_use]
pub fn truncate_decimals(value: f64, decimals: i32) -> f64 {
    let rate = 10_f64.powi(decimals);
    (value * rate).trunc() / rate
}

/// Mirrors `value` about `origin`.
#[must_use]
pub fn mirror_by(value: f64, origin: f64) -> f64 {
    origin + (origin - value)
}
