//! Newtype IDs for type-safe record references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different record types, and [`IdSequence`]
//! to hand out fresh ones.

use core::marker::PhantomData;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use stockroom_core::define_id;
/// define_id!(WidgetId);
/// define_id!(GadgetId);
///
/// let widget_id = WidgetId::new(1);
/// let gadget_id = GadgetId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WidgetId = gadget_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);
define_id!(ImageId);

/// Monotonic ID allocator.
///
/// Hands out strictly increasing values regardless of how many records
/// currently exist, so removing a record never frees its ID for reuse.
#[derive(Debug, Clone)]
pub struct IdSequence<T> {
    next: i32,
    _marker: PhantomData<T>,
}

impl<T: From<i32>> IdSequence<T> {
    /// Start a sequence whose first value is `last + 1`.
    #[must_use]
    pub const fn after(last: i32) -> Self {
        Self {
            next: last.saturating_add(1),
            _marker: PhantomData,
        }
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> T {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        T::from(id)
    }

    /// Peek at the value the next allocation will return.
    #[must_use]
    pub const fn peek(&self) -> i32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_after_last() {
        let mut seq = IdSequence::<ProductId>::after(7);
        assert_eq!(seq.next_id(), ProductId::new(8));
        assert_eq!(seq.next_id(), ProductId::new(9));
        assert_eq!(seq.peek(), 10);
    }

    #[test]
    fn test_id_display_and_conversion() {
        let id = OrderId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(id.as_i32(), 42);
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let json = serde_json::to_string(&ImageId::new(3)).unwrap_or_default();
        assert_eq!(json, "3");
    }
}
