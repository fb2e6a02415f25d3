use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create laboratories table
        manager
            .create_table(
                Table::create()
                    .table(Laboratories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Laboratories::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Laboratories::Name).string().not_null())
                    .col(ColumnDef::new(Laboratories::Specialty).string().not_null())
                    .col(ColumnDef::new(Laboratories::OpeningHours).string())
                    .to_owned(),
            )
            .await?;

        // Create professors table, keyed by CPF
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Cpf)
                            .string_len(14)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::Email).string())
                    .to_owned(),
            )
            .await?;

        // Create disciplines table
        manager
            .create_table(
                Table::create()
                    .table(Disciplines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Disciplines::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Disciplines::Name).string().not_null())
                    .col(ColumnDef::new(Disciplines::CreditHours).integer())
                    .to_owned(),
            )
            .await?;

        // Create class_groups table
        manager
            .create_table(
                Table::create()
                    .table(ClassGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassGroups::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassGroups::Name).string().not_null())
                    .col(ColumnDef::new(ClassGroups::Year).integer().not_null())
                    .col(ColumnDef::new(ClassGroups::Term).integer())
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::StartsAt).timestamp().not_null())
                    .col(ColumnDef::new(Reservations::EndsAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(Reservations::ProfessorCpf)
                            .string_len(14)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::DisciplineCode)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::ClassCode).integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::LaboratoryCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string_len(16)
                            .not_null()
                            .default("PENDENTE"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Reservations::StartsAt).lt(Expr::col(Reservations::EndsAt)))
                    .check(Expr::col(Reservations::Status).is_in([
                        "PENDENTE",
                        "CONCLUIDO",
                        "CANCELADO",
                    ]))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-professor_cpf")
                            .from(Reservations::Table, Reservations::ProfessorCpf)
                            .to(Professors::Table, Professors::Cpf)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-discipline_code")
                            .from(Reservations::Table, Reservations::DisciplineCode)
                            .to(Disciplines::Table, Disciplines::Code)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-class_code")
                            .from(Reservations::Table, Reservations::ClassCode)
                            .to(ClassGroups::Table, ClassGroups::Code)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-laboratory_code")
                            .from(Reservations::Table, Reservations::LaboratoryCode)
                            .to(Laboratories::Table, Laboratories::Code)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Disciplines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Laboratories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Laboratories {
    Table,
    Code,
    Name,
    Specialty,
    OpeningHours,
}

#[derive(Iden)]
enum Professors {
    Table,
    Cpf,
    Name,
    Email,
}

#[derive(Iden)]
enum Disciplines {
    Table,
    Code,
    Name,
    CreditHours,
}

#[derive(Iden)]
enum ClassGroups {
    Table,
    Code,
    Name,
    Year,
    Term,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Code,
    StartsAt,
    EndsAt,
    ProfessorCpf,
    DisciplineCode,
    ClassCode,
    LaboratoryCode,
    Status,
    CreatedAt,
}
