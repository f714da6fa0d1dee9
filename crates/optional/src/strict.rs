//! Strict optional container: an absent payload is a caller error.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::format;
use alloc::string::String;

use crate::error::NullPayloadError;

/// Container that either holds a value of type `T` or is empty, and treats
/// wrapping an absent payload as caller misuse.
///
/// Where [`Optional`] collapses an absent payload to the empty state,
/// `OptionalStrict` rejects it with [`NullPayloadError`], so a container
/// obtained through [`of`] is always present. All other behavior matches
/// [`Optional`].
///
/// Zero-value construction (`OptionalStrict::default()`) does not go through
/// [`of`] and therefore bypasses the rejection rule; it yields the empty
/// state, same as the permissive variant.
///
/// [`Optional`]: crate::Optional
/// [`of`]: OptionalStrict::of
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalStrict<T> {
    present: bool,
    payload: T,
}

impl<T> OptionalStrict<T> {
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

    /// Wraps `payload`, rejecting an absent one with [`NullPayloadError`].
    ///
    /// No `Default` bound here: the rejecting path never materializes an
    /// empty payload slot.
    pub fn of(payload: Option<T>) -> Result<Self, NullPayloadError> {
        match payload {
            Some(value) => Ok(Self {
                present: true,
                payload: value,
            }),
            None => Err(NullPayloadError),
        }
    }

    /// True when the container holds a value.
    pub fn has_value(&self) -> bool {
        self.present
    }

    /// Borrows the payload slot as stored: the wrapped value when present,
    /// `T::default()` when empty.
    pub fn value(&self) -> &T {
        &self.payload
    }

    /// Consumes the container and returns the payload slot verbatim.
    pub fn into_value(self) -> T {
        self.payload
    }

    /// Compares against a value of any type. Anything that is not an
    /// `OptionalStrict<T>` is simply unequal; the comparison never fails.
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
impl<T: PartialEq> PartialEq for OptionalStrict<T> {
    fn eq(&self, other: &Self) -> bool {
        (!self.present && !other.present)
            || (self.present == other.present && self.payload == other.payload)
    }
}

impl<T: Eq> Eq for OptionalStrict<T> {}

/// Presence feeds the hasher ahead of the payload, matching [`Optional`].
///
/// [`Optional`]: crate::Optional
impl<T: Hash> Hash for OptionalStrict<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.present.hash(state);
        self.payload.hash(state);
    }
}

/// Empty renders as the empty string; present renders the payload itself.
impl<T: fmt::Display> fmt::Display for OptionalStrict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            self.payload.fmt(f)
        } else {
            Ok(())
        }
    }
}

impl<T> From<T> for OptionalStrict<T> {
    /// A plain value cannot be absent, so this path never rejects.
    fn from(payload: T) -> Self {
        Self {
            present: true,
            payload,
        }
    }
}

/// The rejecting construction path, as a conversion.
impl<T> TryFrom<Option<T>> for OptionalStrict<T> {
    type Error = NullPayloadError;

    fn try_from(payload: Option<T>) -> Result<Self, Self::Error> {
        Self::of(payload)
    }
}

impl<T> From<OptionalStrict<T>> for Option<T> {
    /// Projects back to the nullable boundary: `None` when empty.
    fn from(optional: OptionalStrict<T>) -> Self {
        if optional.present {
            Some(optional.payload)
        } else {
            None
        }
    }
}
