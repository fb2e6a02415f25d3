use models::rules::ReservationPolicy;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AppState {
    pub db: DatabaseConnection,
    pub policy: ReservationPolicy,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(db: DatabaseConnection, policy: ReservationPolicy) -> SharedState {
        Arc::new(Self { db, policy })
    }
}
