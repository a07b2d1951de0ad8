//! Database providers

pub mod memory;
#[cfg(feature = "store-mongodb")]
pub mod mongo;

// Re-export for convenience
pub use memory::{MemoryDailyTodoRepository, MemoryUserRepository};
#[cfg(feature = "store-mongodb")]
pub use mongo::{MongoDailyTodoRepository, MongoStore, MongoUserRepository};
