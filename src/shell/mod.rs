// Composition root for the vehicle command service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the execution sink per served vehicle.
// - Expose the HTTP and GraphQL routers to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
