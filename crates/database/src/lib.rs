//! Persistence for LabFácil: sea-orm entities, connection setup and the
//! services the HTTP layer calls into.

pub mod db;
pub mod entities;
pub mod error;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
