//! Name and number helpers for building plugin output.

use crate::error::{NagError, Result};

/// Largest supported `|places|` for [`round_to_places`].
///
/// `10^308` is the last finite power of ten and `10^-308` is already
/// subnormal, so the scale factor stays a normal `f64` up to 307.
pub const MAX_PLACES: i32 = 307;

/// Returns the part of `path` after the last `/`.
///
/// Paths without a `/` are returned unchanged and a trailing `/` yields an
/// empty string. No `.`/`..` handling is done.
///
/// ```rust
/// use nagutils::basename;
///
/// assert_eq!(basename("/usr/lib/nagios/plugins/check_disk"), "check_disk");
/// assert_eq!(basename("check_disk"), "check_disk");
/// assert_eq!(basename("/usr/lib/"), "");
/// ```
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Rounds half up to the nearest integer: `floor(value + 0.5)`.
///
/// Negative halves round towards positive infinity, so `-0.5` becomes `0`
/// and `-1.5` becomes `-1`.
pub fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds `value` to `places` decimal places using [`round`].
///
/// `places` may be zero or negative (`-2` rounds to hundreds). Non-finite
/// input, `|places| > MAX_PLACES` or a scaled value outside the `f64` range
/// return [`NagError::NumericOverflow`].
pub fn round_to_places(value: f64, places: i32) -> Result<f64> {
    let overflow = || NagError::NumericOverflow { value, places };

    if !value.is_finite() || places.unsigned_abs() > MAX_PLACES.unsigned_abs() {
        return Err(overflow());
    }

    let shift = 10f64.powi(places);
    let scaled = value * shift;
    if !scaled.is_finite() {
        return Err(overflow());
    }

    let rounded = round(scaled) / shift;
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(overflow())
    }
}
