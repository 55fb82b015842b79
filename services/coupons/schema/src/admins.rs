use sea_orm::entity::prelude::*;

/// Administrator credentials. `password_hash` is an argon2id PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admin_sessions::Entity")]
    AdminSessions,
}

impl Related<super::admin_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
