// Composition root for the time_entries bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the key-value store, clock and session registry.
// - Expose the HTTP and GraphQL surfaces.
// - Spawn the display ticker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod identity;
pub mod state;
pub mod workers;
