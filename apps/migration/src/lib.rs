//! Database migrations for the mireddit backend.

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_posts;
mod m20260101_000002_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_posts::Migration),
            Box::new(m20260101_000002_create_users::Migration),
        ]
    }
}
