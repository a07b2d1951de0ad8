//! Rocket application assembly

use crate::cors::{Cors, preflight};
use crate::error::json_catchers;
use crate::handlers::{auth_handlers, health, todo_handlers};
use crate::state::ServerState;
use dailydev_infrastructure::config::ServerCorsConfig;
use rocket::{Build, Rocket, routes};

/// Build the Rocket application over the given state
///
/// Network settings are applied by the caller through `Rocket::configure`.
pub fn build_rocket(state: ServerState, cors: &ServerCorsConfig) -> Rocket<Build> {
    let mut rocket = rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![
                auth_handlers::register,
                auth_handlers::login,
                auth_handlers::profile,
                todo_handlers::get_todos,
                todo_handlers::save_todos,
                todo_handlers::mark_todo,
                todo_handlers::delete_todo,
                health::health,
            ],
        )
        .register("/", json_catchers());

    if cors.enabled {
        rocket = rocket
            .mount("/", routes![preflight])
            .attach(Cors::new(cors.allowed_origins.clone()));
    }

    rocket
}
