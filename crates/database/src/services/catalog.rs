use crate::entities::{class_groups, disciplines, laboratories, professors};
use models::records::{ClassGroup, Discipline, Laboratory, Professor};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Read-only access to the reference tables
pub struct CatalogService;

impl CatalogService {
    pub async fn laboratories(db: &DatabaseConnection) -> Result<Vec<Laboratory>, DbErr> {
        let rows = laboratories::Entity::find()
            .order_by_asc(laboratories::Column::Name)
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Laboratory::from).collect())
    }

    pub async fn professors(db: &DatabaseConnection) -> Result<Vec<Professor>, DbErr> {
        let rows = professors::Entity::find()
            .order_by_asc(professors::Column::Name)
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Professor::from).collect())
    }

    pub async fn disciplines(db: &DatabaseConnection) -> Result<Vec<Discipline>, DbErr> {
        let rows = disciplines::Entity::find()
            .order_by_asc(disciplines::Column::Name)
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Discipline::from).collect())
    }

    pub async fn class_groups(db: &DatabaseConnection) -> Result<Vec<ClassGroup>, DbErr> {
        let rows = class_groups::Entity::find()
            .order_by_asc(class_groups::Column::Name)
            .all(db)
            .await?;

        Ok(rows.into_iter().map(ClassGroup::from).collect())
    }
}
