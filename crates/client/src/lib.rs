//! Client side of LabFácil: a typed API client, the in-memory data store
//! the screens read from, and the pure logic behind each screen.

pub mod api;
pub mod dashboard;
pub mod filter;
pub mod form;
pub mod format;
pub mod messages;
pub mod render;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
