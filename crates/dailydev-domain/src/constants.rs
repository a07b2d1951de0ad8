//! Domain layer constants

/// Calendar date format used to partition todo lists (ISO-8601 `YYYY-MM-DD`)
pub const TODO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Name of the users collection
pub const USERS_COLLECTION: &str = "users";

/// Name of the per-day todo collection
pub const DAILY_TODOS_COLLECTION: &str = "dailyTodos";

/// Bearer token lifetime in seconds (24 hours)
pub const TOKEN_LIFETIME_SECS: u64 = 86_400;
