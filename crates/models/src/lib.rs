//! Domain types shared by the LabFácil server and client.
//!
//! Database value conversions live behind the `database` feature and OpenAPI
//! schemas behind the `openapi` feature, so the client pulls in neither.

pub mod days;
pub mod hours;
pub mod records;
pub mod rules;
pub mod status;
pub mod timestamp;
