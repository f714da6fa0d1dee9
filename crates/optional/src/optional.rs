//! Permissive optional container: an absent payload collapses to empty.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::format;
use alloc::string::String;

/// Container that either holds a value of type `T` or is empty.
///
/// Presence is tracked by a flag next to the payload slot, so the payload
/// itself is never nullable: when the container is empty the slot holds
/// `T::default()`. Wrapping an absent payload is legal and collapses to the
/// empty state, which means construction has no failure path. Once built, a
/// container never changes.
///
/// Zero-value construction (`Optional::default()`) yields the empty state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional<T> {
    present: bool,
    payload: T,
}

impl<T> Optional<T> {
    /// Returns the empty container.
    pub fn empty() -> Self
    where
        T: Default,
    {
        Self {
            present: false,
            payload: T::default(),
        }
    }

    /// Wraps `payload`. An absent payload collapses to the empty state.
    pub fn of(payload: Option<T>) -> Self
    where
        T: Default,
    {
        match payload {
            Some(value) => Self {
                present: true,
                payload: value,
            },
            None => Self::empty(),
        }
    }

    /// True when the container holds a value.
    pub fn has_value(&self) -> bool {
        self.present
    }

    /// Borrows the payload slot as stored: the wrapped value when present,
    /// `T::default()` when empty. Callers gate on [`has_value`] first.
    ///
    /// [`has_value`]: Optional::has_value
    pub fn value(&self) -> &T {
        &self.payload
    }

    /// Consumes the container and returns the payload slot verbatim.
    pub fn into_value(self) -> T {
        self.payload
    }

    /// Compares against a value of any type. Anything that is not an
    /// `Optional<T>` is simply unequal; the comparison never fails.
    pub fn eq_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        match other.downcast_ref::<Self>() {
            Some(other) => self == other,
            None => false,
        }
    }

    /// Renders both fields regardless of presence, for diagnostics:
    /// `HasValue: False, Value: ` or `HasValue: True, Value: test`.
    pub fn to_debug_string(&self) -> String
    where
        T: fmt::Display,
    {
        format!(
            "HasValue: {}, Value: {}",
            if self.present { "True" } else { "False" },
            self.payload
        )
    }
}

/// Equal when both sides are empty, or both are present with equal payloads.
/// Presence always participates: a container holding `T::default()` is not
/// equal to the empty container.
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        (!self.present && !other.present)
            || (self.present == other.present && self.payload == other.payload)
    }
}

impl<T: Eq> Eq for Optional<T> {}

/// Presence feeds the hasher ahead of the payload, so the empty container
/// and a present default payload keep distinct hash streams.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.present.hash(state);
        self.payload.hash(state);
    }
}

/// Empty renders as the empty string; present renders the payload itself.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            self.payload.fmt(f)
        } else {
            Ok(())
        }
    }
}

impl<T> From<T> for Optional<T> {
    /// A plain value is always present; absence only enters through `Option`.
    fn from(payload: T) -> Self {
        Self {
            present: true,
            payload,
        }
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(payload: Option<T>) -> Self {
        Self::of(payload)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Projects back to the nullable boundary: `None` when empty.
    fn from(optional: Optional<T>) -> Self {
        if optional.present {
            Some(optional.payload)
        } else {
            None
        }
    }
}
