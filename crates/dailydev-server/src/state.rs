//! Shared request state

use dailydev_application::{AuthService, TodoService};
use dailydev_infrastructure::di::AppContext;
use std::sync::Arc;

/// Services available to every handler through Rocket's managed state
#[derive(Clone)]
pub struct ServerState {
    /// Registration, login and token verification
    pub auth: Arc<AuthService>,
    /// Per-day todo operations
    pub todos: Arc<TodoService>,
}

impl ServerState {
    /// Build the state from a bootstrapped application context
    pub fn from_context(context: &AppContext) -> Self {
        Self {
            auth: context.auth_service(),
            todos: context.todo_service(),
        }
    }
}
