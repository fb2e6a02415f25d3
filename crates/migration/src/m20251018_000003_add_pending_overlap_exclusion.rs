use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Exclusion constraints are Postgres only; elsewhere the row locks
        // taken by the reservation service are the only guard
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        manager
            .get_connection()
            .execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist;")
            .await?;

        // Two pending reservations of the same laboratory may not overlap
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE reservations
                ADD CONSTRAINT reservations_pending_no_overlap
                EXCLUDE USING gist (
                    laboratory_code WITH =,
                    tsrange(starts_at, ends_at, '[)') WITH &&
                ) WHERE (status = 'PENDENTE');",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE reservations DROP CONSTRAINT IF EXISTS reservations_pending_no_overlap;",
            )
            .await?;

        Ok(())
    }
}
