//! Domain result type
//!
//! Fallible domain operations return `DomainResult<T>` instead of panicking.
//! The success arm carries the payload, the failure arm carries exactly one
//! [`DomainError`] from the registry; the sum type makes any other
//! combination unrepresentable, and payload access on a failure is rejected
//! at compile time. Payload-less operations use `DomainResult<()>`.

use crate::shared::error::DomainError;

/// Standard result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
