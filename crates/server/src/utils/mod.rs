pub mod shutdown;
pub mod sweep;
