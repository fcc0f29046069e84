//! Math utility functions.

use num_traits::{Float, ToPrimitive};

use crate::Component;

/// Wrap `value` into `[0, period)`. Negative values wrap forward; NaN and
/// infinities wrap to zero.
pub fn wrap<T: Float>(value: T, period: T) -> T {
    let rem = value % period;
    if !rem.is_finite() {
        return T::zero();
    }

    let rem = if rem < T::zero() { rem + period } else { rem };
    if rem >= period {
        T::zero()
    } else {
        rem
    }
}

/// Clamp `value` into `[min, max]`. NaN clamps to `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Scale a value in `[0, 1]` to an 8-bit channel, rounding to the nearest
/// integer.
pub fn to_channel(unit: Component) -> u8 {
    (clamp(unit, 0.0, 1.0) * 255.0).round().to_u8().unwrap_or(0)
}
