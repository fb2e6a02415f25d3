use chrono::Local;
use database::services::ReservationService;
use log::{debug, error, info};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Runs one completion pass and returns how many reservations changed
pub async fn complete_elapsed(db: &DatabaseConnection) -> u64 {
    let now = Local::now().naive_local();

    match ReservationService::complete_elapsed(db, now).await {
        Ok(0) => {
            debug!("Completion sweep found nothing to do");
            0
        }
        Ok(changed) => {
            info!("Marked {changed} elapsed reservations as completed");
            changed
        }
        Err(err) => {
            error!("Completion sweep failed: {err}");
            0
        }
    }
}

/// Marks elapsed pending reservations as completed every `period`
pub fn spawn(db: DatabaseConnection, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            complete_elapsed(&db).await;
        }
    })
}
