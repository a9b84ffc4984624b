pub mod error;
pub mod error_record;
pub mod errors;
pub mod invocation;
pub mod report;
pub mod traits;

pub use error::{Result, ServiceObjectError};
pub use error_record::ErrorRecord;
pub use errors::Errors;
pub use invocation::{Invocation, InvocationState};
pub use report::InvocationReport;
pub use traits::ServiceObject;
