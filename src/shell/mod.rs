// Composition root for the attendance service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store adapters and wire them into use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod actor;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
