use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub marca: String,

    #[sea_orm(column_type = "Text")]
    pub modelo: String,

    pub anio: i32,

    #[sea_orm(column_type = "Double")]
    pub precio: f64,

    pub kilometraje: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub color: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub telefono: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub fotografia: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub fecha_de_alta: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub fecha_de_modificacion: DateTimeWithTimeZone,

    // Set once by soft delete; rows with a value are invisible to every read path
    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub fecha_de_eliminacion: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
