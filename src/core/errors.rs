use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::error::Result;
use crate::core::error_record::ErrorRecord;

/// Ordered collection of [`ErrorRecord`]s accumulated during one invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors {
    records: Vec<ErrorRecord>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping insertion order
    pub fn push(&mut self, record: impl Into<ErrorRecord>) {
        self.records.push(record.into());
    }

    /// Shorthand for a record tied to an input field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.records.push(ErrorRecord::new(message).with_field(field));
    }

    /// Append a record built from untyped JSON.
    ///
    /// Fails with `InvalidErrorType` and leaves the collection untouched if
    /// the value is not an object with a string `message`.
    pub fn push_value(&mut self, value: Value) -> Result<()> {
        let record = ErrorRecord::try_from(value)?;
        self.records.push(record);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&ErrorRecord> {
        self.records.first()
    }

    /// Messages in insertion order
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Records attached to the given field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ErrorRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.field.as_deref() == Some(field))
    }

    pub fn as_slice(&self) -> &[ErrorRecord] {
        &self.records
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl From<Vec<ErrorRecord>> for Errors {
    fn from(records: Vec<ErrorRecord>) -> Self {
        Self { records }
    }
}

impl Extend<ErrorRecord> for Errors {
    fn extend<I: IntoIterator<Item = ErrorRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = ErrorRecord;
    type IntoIter = std::vec::IntoIter<ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ErrorRecord;
    type IntoIter = std::slice::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::ops::Index<usize> for Errors {
    type Output = ErrorRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
