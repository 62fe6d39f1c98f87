use std::mem::{size_of, transmute_copy};
use std::{iter::Map, ops::RangeInclusive};

/// Trait for types that can be represented by a contiguous range of `u8`.
///
/// # Safety
///
/// Must only be implemented for `#[repr(u8)]` enums whose variants span exactly
/// the range `(Self::MIN..=Self::MAX)`.
pub unsafe trait Integer: Copy {
    /// The minimum repr.
    const MIN: u8;

    /// The maximum repr.
    const MAX: u8;

    /// Casts from the repr.
    ///
    /// # Panics
    ///
    /// Panics if the repr is out of range.
    #[inline(always)]
    fn new(i: u8) -> Self {
        assert!(Self::in_range(i), "repr `{i}` is out of range");
        debug_assert_eq!(size_of::<Self>(), size_of::<u8>());
        unsafe { transmute_copy(&i) }
    }

    /// Casts to the repr.
    #[inline(always)]
    fn get(self) -> u8 {
        unsafe { transmute_copy(&self) }
    }

    /// Casts to `usize`.
    #[inline(always)]
    fn index(self) -> usize {
        self.get().into()
    }

    /// Whether a repr is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&i)
    }

    /// The value `delta` steps away from this one, if still in range.
    #[inline(always)]
    fn offset(self, delta: i8) -> Option<Self> {
        match self.get().checked_add_signed(delta) {
            Some(i) if Self::in_range(i) => Some(Self::new(i)),
            _ => None,
        }
    }

    /// An iterator over all values in the range [`Integer::MIN`]..=[`Integer::MAX`].
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<u8>, fn(u8) -> Self> {
        (Self::MIN..=Self::MAX).map(Self::new)
    }
}
