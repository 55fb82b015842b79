use sea_orm_migration::prelude::*;

mod m20260828_000001_create_coupons;
mod m20260828_000002_create_admins;
mod m20260828_000003_create_admin_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260828_000001_create_coupons::Migration),
            Box::new(m20260828_000002_create_admins::Migration),
            Box::new(m20260828_000003_create_admin_sessions::Migration),
        ]
    }
}
