//! Value Objects
//!
//! Small immutable types that normalise raw request strings before they
//! reach the repositories.

/// Case-insensitive email address
pub mod email;
/// Calendar date partitioning todo lists
pub mod todo_date;

pub use email::EmailAddress;
pub use todo_date::TodoDate;
