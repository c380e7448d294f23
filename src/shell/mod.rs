// Composition root for the activities service.
//
// - Read config from the environment.
// - Build the seeded in-memory registry and wire it into the use case handlers.
// - Expose the axum router.

pub mod config;
pub mod http;
pub mod state;
