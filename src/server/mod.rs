//! HTTP boundary for the persona compiler.
//!
//! # Endpoints
//!
//! - `GET  /health`                       - Liveness probe
//! - `POST /api/persona`                  - Compile a posted profile
//! - `GET  /api/archetypes`               - Archetype catalog
//! - `GET  /api/archetypes/:id`           - One archetype
//! - `GET  /api/archetypes/:id/profile`   - Fresh profile seeded from it
//! - `GET  /api/dimensions`               - Dimension options for a builder UI
//! - `GET  /api/tutor`                    - Demo tutor prompt
//! - `POST /api/chat/request`             - Bounded chat request for a backend
//! - `POST /api/simulation/turn`          - Next simulated turn's request
//! - `GET|PATCH|DELETE /api/profile`      - Server-held profile under edit
//! - `POST /api/profile/archetype/:id`    - Seed it from an archetype
//! - `POST /api/profile/compile`          - Compile it (cached until edited)

pub mod config;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{app_router, AppState};
