use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cars::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cars::Marca).text().not_null())
                    .col(ColumnDef::new(Cars::Modelo).text().not_null())
                    .col(ColumnDef::new(Cars::Anio).integer().not_null())
                    .col(ColumnDef::new(Cars::Precio).double().not_null())
                    .col(ColumnDef::new(Cars::Kilometraje).integer().not_null())
                    .col(ColumnDef::new(Cars::Color).text())
                    .col(ColumnDef::new(Cars::Email).text().not_null())
                    .col(ColumnDef::new(Cars::Telefono).text().not_null())
                    .col(ColumnDef::new(Cars::Fotografia).text())
                    .col(
                        ColumnDef::new(Cars::FechaDeAlta)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Cars::FechaDeModificacion)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Cars::FechaDeEliminacion).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // ============================================
        // PERFORMANCE INDEXES
        // ============================================

        // Listing order over active rows only
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cars_active_fecha_de_alta
                ON cars (fecha_de_alta DESC, id DESC)
                WHERE fecha_de_eliminacion IS NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cars_active_precio
                ON cars (precio)
                WHERE fecha_de_eliminacion IS NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Marca,
    Modelo,
    Anio,
    Precio,
    Kilometraje,
    Color,
    Email,
    Telefono,
    Fotografia,
    FechaDeAlta,
    FechaDeModificacion,
    FechaDeEliminacion,
}
