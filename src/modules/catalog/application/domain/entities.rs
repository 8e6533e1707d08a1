use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Oldest model year offered by the year picker.
pub const MIN_CATALOG_YEAR: i32 = 1990;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    #[schema(example = "Toyota")]
    pub nombre: String,
    pub fecha_de_alta: DateTime<Utc>,
    pub fecha_de_modificacion: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: Uuid,
    #[schema(example = "Corolla")]
    pub nombre: String,
    pub marca_id: Uuid,
    pub fecha_de_alta: DateTime<Utc>,
    pub fecha_de_modificacion: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    #[schema(example = 1990)]
    pub min_year: i32,
    #[schema(example = 2025)]
    pub max_year: i32,
    /// Newest first
    pub years: Vec<i32>,
}

impl YearRange {
    /// Every year from `current_year` down to [`MIN_CATALOG_YEAR`].
    pub fn up_to(current_year: i32) -> Self {
        let max_year = current_year.max(MIN_CATALOG_YEAR);

        Self {
            min_year: MIN_CATALOG_YEAR,
            max_year,
            years: (MIN_CATALOG_YEAR..=max_year).rev().collect(),
        }
    }
}
