use crate::core::errors::Errors;
use crate::core::invocation::Invocation;
use crate::core::Result;

/// Base trait for a single unit of business logic.
///
/// Implementors hold their own input parameters and supply the operation
/// hook [`call`](ServiceObject::call). Domain failures are recorded on the
/// borrowed [`Errors`]; returning `Err` is reserved for failures the
/// service does not want to absorb, and those propagate to the caller.
///
/// Run a service through [`Invocation`], which owns the errors and the
/// cached result:
///
/// ```
/// use service_object::{Errors, ServiceObject, Result};
///
/// struct Double(i32);
///
/// impl ServiceObject for Double {
///     type Output = i32;
///
///     fn call(&mut self, _errors: &mut Errors) -> Result<i32> {
///         Ok(self.0 * 2)
///     }
/// }
///
/// let outcome = Double(21).perform().unwrap();
/// assert!(outcome.success());
/// assert_eq!(outcome.result(), Some(&42));
/// ```
pub trait ServiceObject {
    type Output;

    /// The operation hook.
    ///
    /// The default implementation fails with `NotImplemented`; every service
    /// is expected to override it.
    fn call(&mut self, _errors: &mut Errors) -> Result<Self::Output> {
        Err(crate::core::ServiceObjectError::not_implemented(self.name()))
    }

    /// Name used in logs and reports
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Construct an [`Invocation`] for this service and invoke it once
    fn perform(self) -> Result<Invocation<Self>>
    where
        Self: Sized,
    {
        Invocation::run(self)
    }
}

/// `crate::module::CreateUser<T>` -> `CreateUser`
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
