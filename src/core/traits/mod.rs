pub mod service_object;

pub use service_object::ServiceObject;
