use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::core::error::{Result, ServiceObjectError};
use crate::core::errors::Errors;
use crate::core::report::InvocationReport;
use crate::core::traits::ServiceObject;

/// Where an invocation is in its single-run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationState {
    /// Constructed, hook not run yet
    Pending,
    /// Hook returned; outcome is cached
    Completed,
    /// Hook returned `Err`; it will not be run again
    Aborted,
}

impl fmt::Display for InvocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationState::Pending => write!(f, "pending"),
            InvocationState::Completed => write!(f, "completed"),
            InvocationState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Owns a service object together with its errors and cached result.
///
/// The hook runs at most once. After [`invoke`](Invocation::invoke) the
/// outcome is read through [`success`](Invocation::success),
/// [`result`](Invocation::result) and [`errors`](Invocation::errors).
pub struct Invocation<S: ServiceObject> {
    id: Uuid,
    service: S,
    errors: Errors,
    result: Option<S::Output>,
    state: InvocationState,
    warn_on_failure: bool,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl<S: ServiceObject> Invocation<S> {
    /// Wrap a service with empty errors and no result
    pub fn new(service: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            errors: Errors::new(),
            result: None,
            state: InvocationState::Pending,
            warn_on_failure: true,
            started_at: None,
            finished_at: None,
        }
    }

    /// Wrap a service, taking logging behaviour from `config`
    pub fn with_config(service: S, config: &Config) -> Self {
        let mut invocation = Self::new(service);
        invocation.warn_on_failure = config.warn_on_failure;
        invocation
    }

    /// Construct and invoke in one step
    pub fn run(service: S) -> Result<Self> {
        let mut invocation = Self::new(service);
        invocation.invoke()?;
        Ok(invocation)
    }

    /// Run the operation hook once and cache its outcome.
    ///
    /// The return value is stored as the result only if the hook recorded no
    /// errors. Later calls return the cached state without re-running the
    /// hook. An `Err` from the hook is returned as is and marks the
    /// invocation aborted, so any further call fails with `Aborted`.
    pub fn invoke(&mut self) -> Result<&mut Self> {
        let service_name = self.service.name();

        match self.state {
            InvocationState::Completed => return Ok(self),
            InvocationState::Aborted => return Err(ServiceObjectError::aborted(service_name)),
            InvocationState::Pending => {}
        }

        let span = info_span!("service_object", service = service_name, invocation_id = %self.id);
        let _enter = span.enter();

        debug!("Invoking service");
        let started_at = Utc::now();
        let outcome = self.service.call(&mut self.errors);
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds();

        self.started_at = Some(started_at);
        self.finished_at = Some(finished_at);

        match outcome {
            Ok(value) => {
                self.state = InvocationState::Completed;

                if self.errors.is_empty() {
                    self.result = Some(value);
                    info!(duration_ms, "Service completed");
                } else if self.warn_on_failure {
                    warn!(
                        duration_ms,
                        error_count = self.errors.len(),
                        errors = %self.errors,
                        "Service failed"
                    );
                } else {
                    debug!(
                        duration_ms,
                        error_count = self.errors.len(),
                        errors = %self.errors,
                        "Service failed"
                    );
                }

                Ok(self)
            }
            Err(err) => {
                self.state = InvocationState::Aborted;
                error!(duration_ms, error = %err, "Service aborted");
                Err(err)
            }
        }
    }

    /// True when no error record has been collected.
    ///
    /// This only reflects recorded domain errors. An aborted invocation whose
    /// hook returned `Err` without recording anything still reports `true`;
    /// check [`state`](Invocation::state) when `invoke` returned `Err`.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Cached output; `None` before invocation or after a failed one
    pub fn result(&self) -> Option<&S::Output> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn has_run(&self) -> bool {
        self.state != InvocationState::Pending
    }

    pub fn state(&self) -> InvocationState {
        self.state
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The wrapped service, with whatever state its hook left behind
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Serializable summary; `None` unless the hook completed
    pub fn report(&self) -> Option<InvocationReport> {
        match (self.state, self.started_at, self.finished_at) {
            (InvocationState::Completed, Some(started_at), Some(finished_at)) => {
                Some(InvocationReport {
                    id: self.id,
                    service: self.service.name().to_string(),
                    success: self.success(),
                    errors: self.errors.clone(),
                    started_at,
                    finished_at,
                    duration_ms: (finished_at - started_at).num_milliseconds(),
                })
            }
            _ => None,
        }
    }

    /// `Ok(output)` on success, otherwise the collected errors.
    ///
    /// A never-invoked invocation has no output and yields `Err` with an
    /// empty collection.
    pub fn into_result(self) -> std::result::Result<S::Output, Errors> {
        match self.result {
            Some(output) if self.errors.is_empty() => Ok(output),
            _ => Err(self.errors),
        }
    }

    pub fn into_parts(self) -> (S, Option<S::Output>, Errors) {
        (self.service, self.result, self.errors)
    }
}

impl<S> fmt::Debug for Invocation<S>
where
    S: ServiceObject + fmt::Debug,
    S::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("id", &self.id)
            .field("service", &self.service)
            .field("state", &self.state)
            .field("result", &self.result)
            .field("errors", &self.errors)
            .finish()
    }
}
