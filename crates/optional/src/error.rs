//! The single failure the library can report.

use thiserror::Error;

/// A has-a-value construction was given no payload.
///
/// Returned by [`OptionalStrict::of`] and its `TryFrom` form when the
/// supplied payload is absent: the caller asserted a value exists but
/// provided none. The permissive [`Optional`] collapses the same input to
/// the empty state instead of failing.
///
/// [`OptionalStrict::of`]: crate::OptionalStrict::of
/// [`Optional`]: crate::Optional
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("has-a-value construction requires a present payload, but none was supplied")]
pub struct NullPayloadError;
