pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_labfacil_tables;
mod m20251018_000002_add_reservation_indexes;
mod m20251018_000003_add_pending_overlap_exclusion;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_labfacil_tables::Migration),
            Box::new(m20251018_000002_add_reservation_indexes::Migration),
            Box::new(m20251018_000003_add_pending_overlap_exclusion::Migration),
        ]
    }
}
