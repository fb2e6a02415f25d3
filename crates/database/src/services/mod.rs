pub mod catalog;
pub mod reservation;

pub use catalog::CatalogService;
pub use reservation::ReservationService;
