pub mod catalog;
pub mod health;
pub mod reservation;
pub mod root;
