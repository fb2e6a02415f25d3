use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Overlap checks scan one laboratory's reservations by start
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_laboratory_starts_at")
                    .table(Reservations::Table)
                    .col(Reservations::LaboratoryCode)
                    .col(Reservations::StartsAt)
                    .to_owned(),
            )
            .await?;

        // Duplicate checks look up a professor and class pair
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_professor_class")
                    .table(Reservations::Table)
                    .col(Reservations::ProfessorCpf)
                    .col(Reservations::ClassCode)
                    .to_owned(),
            )
            .await?;

        // The completion sweep filters on status and end
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status_ends_at")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .col(Reservations::EndsAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_status_ends_at")
                    .table(Reservations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_professor_class")
                    .table(Reservations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_laboratory_starts_at")
                    .table(Reservations::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    LaboratoryCode,
    StartsAt,
    ProfessorCpf,
    ClassCode,
    Status,
    EndsAt,
}
