pub mod class_groups;
pub mod disciplines;
pub mod laboratories;
pub mod professors;
pub mod reservations;
