// Minimal service objects covering each outcome of an invocation

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;
use service_object::{Errors, Result, ServiceObject};

/// Returns a fixed value and records nothing
#[derive(Debug, Clone)]
pub struct SuccessfulService<T: Clone> {
    pub return_value: T,
}

impl<T: Clone> ServiceObject for SuccessfulService<T> {
    type Output = T;

    fn call(&mut self, _errors: &mut Errors) -> Result<T> {
        Ok(self.return_value.clone())
    }
}

/// Records every message in order, then returns a value anyway
#[derive(Debug, Clone)]
pub struct FailingService {
    pub messages: Vec<String>,
    pub return_value: i64,
}

impl FailingService {
    pub fn new(messages: &[&str]) -> Self {
        Self {
            messages: messages.iter().map(|m| m.to_string()).collect(),
            return_value: 7,
        }
    }
}

impl ServiceObject for FailingService {
    type Output = i64;

    fn call(&mut self, errors: &mut Errors) -> Result<i64> {
        for message in &self.messages {
            errors.push(message.as_str());
        }
        Ok(self.return_value)
    }
}

/// Pushes an untyped error entry, propagating `InvalidErrorType`
#[derive(Debug, Clone)]
pub struct DynamicErrorService {
    pub entry: Value,
}

impl ServiceObject for DynamicErrorService {
    type Output = ();

    fn call(&mut self, errors: &mut Errors) -> Result<()> {
        errors.push_value(self.entry.clone())?;
        Ok(())
    }
}

/// Counts hook executions through a handle the test keeps
#[derive(Debug, Clone, Default)]
pub struct CountingService {
    pub calls: Rc<Cell<u32>>,
}

impl ServiceObject for CountingService {
    type Output = u32;

    fn call(&mut self, _errors: &mut Errors) -> Result<u32> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.calls.get())
    }
}

/// Never overrides the operation hook
#[derive(Debug, Clone, Default)]
pub struct UnimplementedService;

impl ServiceObject for UnimplementedService {
    type Output = String;
}
