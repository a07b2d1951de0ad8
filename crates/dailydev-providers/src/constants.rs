//! Provider constants

/// MongoDB server error code for unique index violations
pub const MONGODB_DUPLICATE_KEY_CODE: i32 = 11000;

/// Name of the unique index on `users.email`
pub const USERS_EMAIL_INDEX: &str = "email_unique";

/// Name of the compound index on `dailyTodos.(userId, date)`
pub const DAILY_TODOS_KEY_INDEX: &str = "user_date";
