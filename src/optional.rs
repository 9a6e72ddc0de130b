//! Provides [`Optional`](Optional), an immutable container for a value that may be missing.

use crate::{error::OptionalError, guard, Nullable};
use std::ptr;

/// A container holding either one present value of type `T` or nothing.
///
/// An `Optional` never holds an absence-equivalent value (see [`Nullable`]): building one from
/// `None`, `Value::Null` or a null pointer always results in the empty state. There is no way to
/// mutate an existing instance. Every combinator consumes the receiver and returns either a new
/// instance or the receiver itself.
///
/// Instances are built with [`empty`](Optional::empty), [`of`](Optional::of) or
/// [`of_nullable`](Optional::of_nullable), or converted from an `Option`.
///
/// ```
/// use optional::Optional;
/// use serde_json::json;
///
/// let settings = json!({ "port": 8080, "host": null });
///
/// let host = Optional::of_nullable(settings["host"].clone()).or_else(json!("localhost"));
/// let port = Optional::from(settings["port"].as_u64())
///     .filter(|port| *port > 1024)
///     .or_else(80);
///
/// assert_eq!(host, "localhost");
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<T> {
    /// The contained value. Never holds an absence-equivalent value.
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Returns the empty `Optional`.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Returns an `Optional` holding a given value.
    ///
    /// Returns an error with the message [`NULLABLE_ARGUMENT`](guard::NULLABLE_ARGUMENT) if the
    /// value is absence-equivalent.
    pub fn of(value: T) -> Result<Self, OptionalError>
    where
        T: Nullable,
    {
        let value = guard::require_non_null(value, None)?;
        Ok(Self { value: Some(value) })
    }

    /// Returns an `Optional` holding a given value, or the empty `Optional` if the value is
    /// absence-equivalent.
    pub fn of_nullable(value: T) -> Self
    where
        T: Nullable,
    {
        if value.is_null() {
            Self::empty()
        } else {
            Self { value: Some(value) }
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns a reference to the contained value, or [`OptionalError::NoValuePresent`] if there
    /// isn't one.
    pub fn get(&self) -> Result<&T, OptionalError> {
        self.value.as_ref().ok_or(OptionalError::NoValuePresent)
    }

    /// Calls `consumer` with the contained value if there is one.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            consumer(value);
        }
    }

    /// Calls `action` with the contained value if there is one, otherwise calls `empty_action`.
    /// Exactly one of the two is called.
    pub fn if_present_or_else<F, G>(&self, action: F, empty_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// Returns `self` if it's empty or if its value matches `predicate`, otherwise returns the
    /// empty `Optional`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(value) = &self.value {
            if !predicate(value) {
                return Self::empty();
            }
        }

        self
    }

    /// Applies `mapper` to the contained value. An absence-equivalent result becomes the empty
    /// `Optional`. `mapper` isn't called when `self` is empty.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        U: Nullable,
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Optional::of_nullable(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Applies `mapper` to the contained value and returns its result as-is. `mapper` isn't
    /// called when `self` is empty.
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Returns the contained value, or `other` if there isn't one.
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the contained value, or the result of `producer` if there isn't one. `producer` is
    /// only called when `self` is empty.
    pub fn or_else_get<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(producer)
    }

    /// Returns the contained value, or the error built by `error_supplier` if there isn't one.
    /// `error_supplier` is only called when `self` is empty.
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(error_supplier)
    }

    /// Borrows the contained value into a new `Optional`.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> PartialEq for Optional<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.value == other.value
    }
}

impl<T> Eq for Optional<T> where T: Eq {}

impl<T> From<Option<T>> for Optional<T>
where
    T: Nullable,
{
    fn from(value: Option<T>) -> Self {
        Self {
            value: value.filter(|value| !value.is_null()),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T> Nullable for Optional<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::{cell::Cell, ptr};

    #[derive(Debug, PartialEq)]
    struct Custom(&'static str);
    crate::never_null!(Custom);

    #[test]
    fn of_holds_value() -> anyhow::Result<()> {
        for value in &[0, 1, -1, i32::MAX] {
            let optional = Optional::of(*value)?;
            assert_eq!(optional.get()?, value);
            assert!(optional.is_present());
            assert!(!optional.is_empty());
        }

        assert_eq!(Optional::of("")?.get()?, &"");
        assert_eq!(Optional::of(false)?.get()?, &false);
        assert_eq!(Optional::of(json!(0))?.get()?, &json!(0));
        Ok(())
    }

    #[test]
    fn of_rejects_absent_values() {
        let expected = OptionalError::InvalidArgument(String::from(guard::NULLABLE_ARGUMENT));

        assert_eq!(Optional::of(None::<i32>).unwrap_err(), expected);
        assert_eq!(Optional::of(Value::Null).unwrap_err(), expected);
        assert!(Optional::of(ptr::null::<u8>()).is_err());
    }

    #[test]
    fn of_nullable() -> anyhow::Result<()> {
        assert!(Optional::of_nullable(None::<i32>).is_empty());
        assert!(Optional::of_nullable(json!(null)).is_empty());
        assert_eq!(Optional::of_nullable(Some(3)).get()?, &Some(3));
        assert_eq!(Optional::of_nullable(json!("")).get()?, &json!(""));
        Ok(())
    }

    #[test]
    fn empty_get_fails() {
        let err = Optional::<i32>::empty().get().unwrap_err();
        assert_eq!(err, OptionalError::NoValuePresent);
        assert_eq!(err.to_string(), "No value present");

        assert!(Optional::<i32>::default().is_empty());
    }

    #[test]
    fn if_present() -> anyhow::Result<()> {
        let seen = Cell::new(0);
        Optional::of(5)?.if_present(|v| seen.set(*v));
        assert_eq!(seen.get(), 5);

        Optional::<i32>::empty().if_present(|_| seen.set(-1));
        assert_eq!(seen.get(), 5);
        Ok(())
    }

    #[test]
    fn if_present_or_else_calls_exactly_one() -> anyhow::Result<()> {
        let present = Cell::new(0);
        let empty = Cell::new(0);

        Optional::of("x")?.if_present_or_else(|_| present.set(present.get() + 1), || {
            empty.set(empty.get() + 1)
        });
        assert_eq!((present.get(), empty.get()), (1, 0));

        Optional::<&str>::empty().if_present_or_else(|_| present.set(present.get() + 1), || {
            empty.set(empty.get() + 1)
        });
        assert_eq!((present.get(), empty.get()), (1, 1));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "consumer failed")]
    fn consumer_panics_propagate() {
        Optional::of_nullable(1).if_present(|_| panic!("consumer failed"));
    }

    #[test]
    fn filter() -> anyhow::Result<()> {
        assert!(Optional::of(5)?.filter(|x| *x > 0).is_present());
        assert!(Optional::of(5)?.filter(|x| *x < 0).is_empty());
        assert!(Optional::<i32>::empty().filter(|_| true).is_empty());
        assert!(Optional::<i32>::empty().filter(|_| false).is_empty());
        Ok(())
    }

    #[test]
    fn filter_returns_receiver() -> anyhow::Result<()> {
        let optional = Optional::of(Box::new(Custom("boxed")))?;
        let inner: *const Custom = &**optional.get()?;

        let filtered = optional.filter(|_| true);
        assert_eq!(&**filtered.get()? as *const Custom, inner);
        Ok(())
    }

    #[test]
    fn map() -> anyhow::Result<()> {
        assert_eq!(Optional::of(json!({}))?.map(|_| 1).get()?, &1);
        assert_eq!(Optional::of(7)?.map(|x| x).get()?, &7);
        assert_eq!(Optional::of(2u8)?.map(|x| x.to_string()).get()?, "2");
        Ok(())
    }

    #[test]
    fn map_collapses_absent_results() -> anyhow::Result<()> {
        assert!(Optional::of(1)?.map(|_| None::<i32>).is_empty());
        assert!(Optional::of(json!({ "a": null }))?
            .map(|v| v["a"].clone())
            .is_empty());
        Ok(())
    }

    #[test]
    fn map_skips_mapper_when_empty() {
        let calls = Cell::new(0);
        let mapped = Optional::<i32>::empty().map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert!(mapped.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn flat_map() -> anyhow::Result<()> {
        let mapped = Optional::of(123i32)?.flat_map(|x| Optional::of_nullable(x.to_string()));
        assert_eq!(mapped.get()?, "123");

        let calls = Cell::new(0);
        let mapped = Optional::<i32>::empty().flat_map(|x| {
            calls.set(calls.get() + 1);
            Optional::of_nullable(x)
        });
        assert!(mapped.is_empty());
        assert_eq!(calls.get(), 0);

        assert!(Optional::of(1)?
            .flat_map(|_| Optional::<i32>::empty())
            .is_empty());
        Ok(())
    }

    #[test]
    fn or_else() -> anyhow::Result<()> {
        assert_eq!(Optional::of(1)?.or_else(2), 1);
        assert_eq!(Optional::empty().or_else(2), 2);
        assert_eq!(Optional::<Option<i32>>::empty().or_else(None), None);
        Ok(())
    }

    #[test]
    fn or_else_get_is_lazy() -> anyhow::Result<()> {
        let calls = Cell::new(0);
        let producer = || {
            calls.set(calls.get() + 1);
            2
        };

        assert_eq!(Optional::of(1)?.or_else_get(producer), 1);
        assert_eq!(calls.get(), 0);

        assert_eq!(Optional::empty().or_else_get(producer), 2);
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn or_else_throw_is_lazy() -> anyhow::Result<()> {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            Custom("missing")
        };

        assert_eq!(Optional::of(1)?.or_else_throw(supplier), Ok(1));
        assert_eq!(calls.get(), 0);

        assert_eq!(
            Optional::<i32>::empty().or_else_throw(supplier),
            Err(Custom("missing"))
        );
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn equality() -> anyhow::Result<()> {
        let nan = Optional::of(f64::NAN)?;
        assert!(nan == nan);
        assert!(nan != Optional::of(f64::NAN)?);

        assert_eq!(Optional::of("a")?, Optional::of("a")?);
        assert_ne!(Optional::of("a")?, Optional::of("b")?);
        assert_ne!(Optional::of("a")?, Optional::empty());
        assert_eq!(Optional::<i32>::empty(), Optional::empty());
        Ok(())
    }

    #[test]
    fn conversions() -> anyhow::Result<()> {
        assert_eq!(Optional::from(Some(1)).get()?, &1);
        assert!(Optional::from(Some(Value::Null)).is_empty());
        assert!(Optional::<u8>::from(None).is_empty());

        let option: Option<i32> = Optional::of(1)?.into();
        assert_eq!(option, Some(1));
        assert_eq!(Optional::<u8>::empty().into_option(), None);

        let owned = Optional::of(String::from("x"))?;
        assert_eq!(owned.as_ref().map(|s| s.len()).get()?, &1);
        assert!(owned.is_present());
        Ok(())
    }
}
