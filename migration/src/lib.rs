pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_000001_create_brands_table;
mod m20250310_000002_create_models_table;
mod m20250310_000003_create_cars_table;
mod m20250310_000004_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_000001_create_brands_table::Migration),
            Box::new(m20250310_000002_create_models_table::Migration),
            Box::new(m20250310_000003_create_cars_table::Migration),
            Box::new(m20250310_000004_seed_catalog::Migration),
        ]
    }
}
