//! Provides the [`Nullable`](Nullable) trait, which decides whether a value counts as absent.
//!
//! Rust doesn't have a null reference, so absence is whatever a type says it is: `None` for an
//! `Option`, `Value::Null` for JSON values and the null pointer for raw pointers. Smart pointers
//! and references defer to what they point at. Everything else is never null; zero, `false` and
//! the empty string are all present values.

use std::{rc::Rc, sync::Arc};

/// A value that may be the absence marker of its type.
pub trait Nullable {
    /// Returns whether this value is absence-equivalent.
    fn is_null(&self) -> bool {
        false
    }
}

/// Declares one or more types as never null by giving them the default [`Nullable`] impl.
///
/// ```
/// use optional::{never_null, Optional};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
/// never_null!(Port);
///
/// assert!(Optional::of(Port(80)).is_ok());
/// ```
#[macro_export]
macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::Nullable for $ty {})*
    };
}

never_null!(
    bool, char, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    str, String,
);

impl<T> Nullable for Vec<T> {}

impl<T> Nullable for [T] {}

impl<T, const N: usize> Nullable for [T; N] {}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for serde_json::Value {
    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
