pub mod domain;
pub mod error;

pub use domain::{Address, AddressField, Draft, FormField, RecordField, UserId, UserRecord};
pub use error::{RequiredField, ValidationError};
