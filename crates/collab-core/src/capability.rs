//! The capability contract every collaborator satisfies.
//!
//! A collaborator exposes exactly one operation, [`Capability::perform`].
//! Unrelated operations live in their own contracts (see
//! [`crate::shapes::Resize`], [`crate::vehicles::Motorized`],
//! [`crate::storage::RecordStore`]) so no implementer ever has to stub out a
//! method that has nothing to do with its role.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{CapabilityError, CapabilityResult};

/// Perform one unit of work.
///
/// Concrete implementers always return `Ok`. The only way to get
/// [`CapabilityError::NotImplemented`] is to call a contract-only stand-in
/// such as [`Unimplemented`].
pub trait Capability {
    type Output;

    fn perform(&self) -> CapabilityResult<Self::Output>;
}

impl<T: Capability + ?Sized> Capability for Box<T> {
    type Output = T::Output;

    fn perform(&self) -> CapabilityResult<Self::Output> {
        (**self).perform()
    }
}

impl<T: Capability + ?Sized> Capability for &T {
    type Output = T::Output;

    fn perform(&self) -> CapabilityResult<Self::Output> {
        (**self).perform()
    }
}

/// Contract-only placeholder: occupies a role but has no behavior.
pub struct Unimplemented<O> {
    operation: String,
    _output: PhantomData<fn() -> O>,
}

impl<O> Unimplemented<O> {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            _output: PhantomData,
        }
    }
}

impl<O> Default for Unimplemented<O> {
    fn default() -> Self {
        Self::new("perform")
    }
}

impl<O> fmt::Debug for Unimplemented<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unimplemented")
            .field("operation", &self.operation)
            .finish()
    }
}

impl<O> Capability for Unimplemented<O> {
    type Output = O;

    fn perform(&self) -> CapabilityResult<O> {
        Err(CapabilityError::not_implemented(self.operation.clone()))
    }
}

/// Extends a base collaborator by transforming its result.
///
/// `perform` runs the base and hands its output to `augment`. Errors from the
/// base pass through untouched. This replaces multi-level subclassing: a
/// "VIP discount" is a regular discount plus one augmentation step, not a
/// subclass of a subclass.
pub struct Augmented<B, F> {
    base: B,
    augment: F,
}

impl<B, F, O> Augmented<B, F>
where
    B: Capability,
    F: Fn(B::Output) -> O,
{
    pub fn new(base: B, augment: F) -> Self {
        Self { base, augment }
    }

    pub fn base(&self) -> &B {
        &self.base
    }
}

impl<B: fmt::Debug, F> fmt::Debug for Augmented<B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Augmented")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<B, F, O> Capability for Augmented<B, F>
where
    B: Capability,
    F: Fn(B::Output) -> O,
{
    type Output = O;

    fn perform(&self) -> CapabilityResult<O> {
        self.base.perform().map(&self.augment)
    }
}
