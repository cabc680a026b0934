//! Property-based invariant tests for pixel geometry (Size, Sides).
//!
//! 1. Shrinking never grows either dimension.
//! 2. Shrinking by zero margins is the identity.
//! 3. Margin sums never panic on extreme values.

use proptest::prelude::*;
use ribbon_core::geometry::{Sides, Size};

fn sides_strategy() -> impl Strategy<Value = Sides> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(t, r, b, l)| Sides::new(t, r, b, l))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (any::<u16>(), any::<u16>()).prop_map(|(w, h)| Size::new(w, h))
}

proptest! {
    #[test]
    fn shrink_never_grows(size in size_strategy(), margins in sides_strategy()) {
        let inner = size.shrink(margins);
        prop_assert!(inner.width <= size.width);
        prop_assert!(inner.height <= size.height);
    }

    #[test]
    fn shrink_by_zero_is_identity(size in size_strategy()) {
        prop_assert_eq!(size.shrink(Sides::ZERO), size);
    }

    #[test]
    fn sums_are_saturating(margins in sides_strategy()) {
        let v = u32::from(margins.top) + u32::from(margins.bottom);
        prop_assert_eq!(u32::from(margins.vertical_sum()), v.min(u32::from(u16::MAX)));
    }
}
