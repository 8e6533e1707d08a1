use sea_orm_migration::prelude::*;

use super::m20250310_000001_create_brands_table::Brands;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Models::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Models::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Models::Nombre).text().not_null())
                    .col(ColumnDef::new(Models::MarcaId).uuid().not_null())
                    .col(
                        ColumnDef::new(Models::FechaDeAlta)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Models::FechaDeModificacion)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_models_marca_id")
                            .from(Models::Table, Models::MarcaId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Models are always listed per brand
        manager
            .create_index(
                Index::create()
                    .name("idx_models_marca_id")
                    .table(Models::Table)
                    .col(Models::MarcaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Models::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Models {
    Table,
    Id,
    Nombre,
    MarcaId,
    FechaDeAlta,
    FechaDeModificacion,
}
