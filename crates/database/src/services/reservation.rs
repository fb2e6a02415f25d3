use crate::{
    entities::{class_groups, disciplines, laboratories, professors, reservations},
    error::ServiceError,
};
use chrono::NaiveDateTime;
use log::{info, warn};
use models::{
    hours::OperatingHours,
    records::{Reservation, ReservationDetails, ReservationInput},
    rules::{Booking, ReservationPolicy, RuleViolation, Slot},
    status::ReservationStatus,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait, prelude::Expr,
};

/// A reservation row joined with the names of what it references
#[derive(Debug, FromQueryResult)]
struct DetailsRow {
    code: i32,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    professor_cpf: String,
    discipline_code: i32,
    class_code: i32,
    laboratory_code: i32,
    status: ReservationStatus,
    created_at: Option<NaiveDateTime>,
    professor_name: Option<String>,
    discipline_name: Option<String>,
    class_name: Option<String>,
    laboratory_name: Option<String>,
}

impl From<DetailsRow> for ReservationDetails {
    fn from(row: DetailsRow) -> Self {
        Self {
            reservation: Reservation {
                code: row.code,
                starts_at: row.starts_at,
                ends_at: row.ends_at,
                professor_cpf: row.professor_cpf,
                discipline_code: row.discipline_code,
                class_code: row.class_code,
                laboratory_code: row.laboratory_code,
                status: row.status,
                created_at: row.created_at,
            },
            professor_name: row.professor_name,
            discipline_name: row.discipline_name,
            class_name: row.class_name,
            laboratory_name: row.laboratory_name,
        }
    }
}

/// Queries and commands on reservations.
///
/// Writes run in a transaction that locks the target reservation, then the
/// laboratory, then the professor, so concurrent writes touching the same
/// rows are serialized before the rules are evaluated.
pub struct ReservationService;

impl ReservationService {
    /// Every reservation with joined names, latest start first
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<ReservationDetails>, DbErr> {
        let rows = reservations::Entity::find()
            .column_as(professors::Column::Name, "professor_name")
            .column_as(disciplines::Column::Name, "discipline_name")
            .column_as(class_groups::Column::Name, "class_name")
            .column_as(laboratories::Column::Name, "laboratory_name")
            .left_join(professors::Entity)
            .left_join(disciplines::Entity)
            .left_join(class_groups::Entity)
            .left_join(laboratories::Entity)
            .order_by_desc(reservations::Column::StartsAt)
            .order_by_desc(reservations::Column::Code)
            .into_model::<DetailsRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(ReservationDetails::from).collect())
    }

    pub async fn create(
        db: &DatabaseConnection,
        policy: &ReservationPolicy,
        input: ReservationInput,
        now: NaiveDateTime,
    ) -> Result<Reservation, ServiceError> {
        let slot = Slot::from(&input);
        ReservationPolicy::check_interval(&slot)?;

        let txn = db.begin().await?;
        let hours = Self::lock_references(&txn, &input).await?;
        let existing = Self::pending_conflicts(&txn, &slot).await?;
        policy.evaluate(&slot, None, hours.as_ref(), &existing, now)?;

        let created = reservations::ActiveModel {
            starts_at: Set(input.starts_at),
            ends_at: Set(input.ends_at),
            professor_cpf: Set(input.professor_cpf),
            discipline_code: Set(input.discipline_code),
            class_code: Set(input.class_code),
            laboratory_code: Set(input.laboratory_code),
            status: Set(ReservationStatus::Pending),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(
            "Created reservation {} of laboratory {}",
            created.code, created.laboratory_code
        );

        Ok(created.into())
    }

    /// Replaces the six writable fields of reservation `code`
    pub async fn update(
        db: &DatabaseConnection,
        policy: &ReservationPolicy,
        code: i32,
        input: ReservationInput,
        now: NaiveDateTime,
    ) -> Result<Reservation, ServiceError> {
        let txn = db.begin().await?;
        let current = Self::lock_reservation(&txn, code).await?;
        let booking = Booking::from(&current);

        let slot = Slot::from(&input);
        ReservationPolicy::check_interval(&slot)?;
        ReservationPolicy::check_mutable(current.status)?;

        let hours = Self::lock_references(&txn, &input).await?;
        let existing = Self::pending_conflicts(&txn, &slot).await?;
        policy.evaluate(&slot, Some(&booking), hours.as_ref(), &existing, now)?;

        let mut active: reservations::ActiveModel = current.into();
        active.starts_at = Set(input.starts_at);
        active.ends_at = Set(input.ends_at);
        active.professor_cpf = Set(input.professor_cpf);
        active.discipline_code = Set(input.discipline_code);
        active.class_code = Set(input.class_code);
        active.laboratory_code = Set(input.laboratory_code);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!("Updated reservation {code}");

        Ok(updated.into())
    }

    pub async fn cancel(
        db: &DatabaseConnection,
        policy: &ReservationPolicy,
        code: i32,
    ) -> Result<Reservation, ServiceError> {
        let txn = db.begin().await?;
        let current = Self::lock_reservation(&txn, code).await?;
        policy.check_cancel(current.status)?;

        if current.status == ReservationStatus::Canceled {
            txn.commit().await?;
            return Ok(current.into());
        }

        let mut active: reservations::ActiveModel = current.into();
        active.status = Set(ReservationStatus::Canceled);
        let canceled = active.update(&txn).await?;

        txn.commit().await?;
        info!("Canceled reservation {code}");

        Ok(canceled.into())
    }

    /// Hard delete, whatever the status
    pub async fn delete(db: &DatabaseConnection, code: i32) -> Result<(), ServiceError> {
        let result = reservations::Entity::delete_by_id(code).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        info!("Deleted reservation {code}");
        Ok(())
    }

    /// Marks pending reservations that ended at or before `now` as completed
    /// and returns how many changed
    pub async fn complete_elapsed(db: &DatabaseConnection, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = reservations::Entity::update_many()
            .col_expr(
                reservations::Column::Status,
                Expr::value(ReservationStatus::Completed),
            )
            .filter(reservations::Column::Status.eq(ReservationStatus::Pending))
            .filter(reservations::Column::EndsAt.lte(now))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn lock_reservation(
        txn: &DatabaseTransaction,
        code: i32,
    ) -> Result<reservations::Model, ServiceError> {
        reservations::Entity::find_by_id(code)
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Locks the laboratory and professor rows, checks that every referenced
    /// row exists and returns the laboratory's operating hours
    async fn lock_references(
        txn: &DatabaseTransaction,
        input: &ReservationInput,
    ) -> Result<Option<OperatingHours>, ServiceError> {
        let laboratory = laboratories::Entity::find_by_id(input.laboratory_code)
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(RuleViolation::UnknownLaboratory)?;

        professors::Entity::find_by_id(input.professor_cpf.clone())
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(RuleViolation::UnknownProfessor)?;

        disciplines::Entity::find_by_id(input.discipline_code)
            .one(txn)
            .await?
            .ok_or(RuleViolation::UnknownDiscipline)?;

        class_groups::Entity::find_by_id(input.class_code)
            .one(txn)
            .await?
            .ok_or(RuleViolation::UnknownClass)?;

        Ok(Self::operating_hours(&laboratory))
    }

    /// A missing, empty or unreadable descriptor leaves the lab unrestricted
    fn operating_hours(laboratory: &laboratories::Model) -> Option<OperatingHours> {
        let descriptor = laboratory.opening_hours.as_deref()?.trim();
        if descriptor.is_empty() {
            return None;
        }

        match descriptor.parse() {
            Ok(hours) => Some(hours),
            Err(err) => {
                warn!(
                    "Ignoring operating hours {descriptor:?} of laboratory {}: {err}",
                    laboratory.code
                );
                None
            }
        }
    }

    /// Pending reservations overlapping the slot on the same laboratory or
    /// for the same professor and class
    async fn pending_conflicts(
        txn: &DatabaseTransaction,
        slot: &Slot<'_>,
    ) -> Result<Vec<Booking>, DbErr> {
        let rows = reservations::Entity::find()
            .filter(reservations::Column::Status.eq(ReservationStatus::Pending))
            .filter(reservations::Column::StartsAt.lt(slot.ends_at))
            .filter(reservations::Column::EndsAt.gt(slot.starts_at))
            .filter(
                Condition::any()
                    .add(reservations::Column::LaboratoryCode.eq(slot.laboratory_code))
                    .add(
                        Condition::all()
                            .add(reservations::Column::ProfessorCpf.eq(slot.professor_cpf))
                            .add(reservations::Column::ClassCode.eq(slot.class_code)),
                    ),
            )
            .all(txn)
            .await?;

        Ok(rows.iter().map(Booking::from).collect())
    }
}
