//! Key types used to address nodes in storage.
//!
//! A [`Key`] is a small copyable value with a reserved sentinel (`NONE`),
//! so node links can be stored inline without wrapping them in `Option`.
//! [`Handle`] is the key handed out by [`Arena`](crate::Arena): a slot index
//! paired with the slot's generation, which lets the arena reject keys
//! whose node has since been removed.

use core::fmt;

/// Trait for key types used to link nodes together.
///
/// # Example
///
/// ```
/// use pallet_collections::{Handle, Key};
///
/// assert!(Handle::NONE.is_none());
/// assert!(usize::NONE.is_none());
/// assert!(7usize.is_some());
/// ```
pub trait Key: Copy + Eq + 'static {
    /// Sentinel value meaning "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

/// Keys handed out by `slab::Slab`.
impl Key for usize {
    const NONE: Self = usize::MAX;
}

/// Generation-checked reference to a slot in an [`Arena`](crate::Arena).
///
/// A handle does not own the value it points at. Once the value is removed
/// the slot's generation moves on, and every lookup with the old handle
/// returns `None` even after the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the arena.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot at the time the handle was issued.
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

impl Key for Handle {
    const NONE: Self = Handle::new(u32::MAX, 0);
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Handle(NONE)")
        } else {
            write!(f, "Handle({}v{})", self.index, self.generation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels() {
        assert!(Handle::NONE.is_none());
        assert!(!Handle::NONE.is_some());
        assert!(usize::NONE.is_none());
        assert!(0usize.is_some());
    }

    #[test]
    fn handle_equality_includes_generation() {
        let a = Handle::new(3, 0);
        let b = Handle::new(3, 1);
        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
        assert!(a.is_some());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Handle::new(4, 2)), "Handle(4v2)");
        assert_eq!(format!("{:?}", Handle::NONE), "Handle(NONE)");
    }
}
