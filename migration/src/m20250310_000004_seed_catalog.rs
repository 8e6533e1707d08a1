use sea_orm_migration::prelude::*;

const CATALOG: [(&str, [&str; 5]); 10] = [
    ("Toyota", ["Corolla", "Camry", "RAV4", "Hilux", "Yaris"]),
    ("Honda", ["Civic", "Accord", "CR-V", "HR-V", "Fit"]),
    ("Nissan", ["Versa", "Sentra", "Altima", "March", "Frontier"]),
    ("Chevrolet", ["Aveo", "Onix", "Spark", "Cruze", "Tahoe"]),
    ("Ford", ["Fiesta", "Focus", "Mustang", "Ranger", "Explorer"]),
    ("Volkswagen", ["Jetta", "Golf", "Polo", "Vento", "Tiguan"]),
    ("Mazda", ["Mazda2", "Mazda3", "Mazda6", "CX-3", "CX-5"]),
    ("Hyundai", ["Accent", "Elantra", "Tucson", "Santa Fe", "Creta"]),
    ("Kia", ["Rio", "Forte", "Sportage", "Sorento", "Seltos"]),
    ("BMW", ["Serie 1", "Serie 3", "Serie 5", "X1", "X3"]),
];

fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn brands_sql() -> String {
    let values: Vec<String> = CATALOG
        .iter()
        .map(|(brand, _)| format!("({})", quoted(brand)))
        .collect();

    format!(
        "INSERT INTO brands (nombre) VALUES {} ON CONFLICT (nombre) DO NOTHING;",
        values.join(", ")
    )
}

fn models_sql(brand: &str, models: &[&str]) -> String {
    let values: Vec<String> = models.iter().map(|m| format!("({})", quoted(m))).collect();

    format!(
        "INSERT INTO models (nombre, marca_id) \
         SELECT v.nombre, b.id FROM (VALUES {}) AS v(nombre) \
         JOIN brands b ON b.nombre = {};",
        values.join(", "),
        quoted(brand)
    )
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&brands_sql()).await?;
        for (brand, models) in CATALOG {
            db.execute_unprepared(&models_sql(brand, &models)).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<String> = CATALOG.iter().map(|(brand, _)| quoted(brand)).collect();

        // Models go with their brand through the cascading foreign key
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DELETE FROM brands WHERE nombre IN ({});",
                names.join(", ")
            ))
            .await?;

        Ok(())
    }
}
