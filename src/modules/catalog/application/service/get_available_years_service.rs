use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::catalog::application::domain::entities::YearRange;
use crate::catalog::application::ports::incoming::use_cases::GetAvailableYearsUseCase;

pub struct GetAvailableYearsService {
    current_year: fn() -> i32,
}

fn utc_year() -> i32 {
    Utc::now().year()
}

impl GetAvailableYearsService {
    pub fn new() -> Self {
        Self {
            current_year: utc_year,
        }
    }

    pub fn with_clock(current_year: fn() -> i32) -> Self {
        Self { current_year }
    }
}

impl Default for GetAvailableYearsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GetAvailableYearsUseCase for GetAvailableYearsService {
    async fn execute(&self) -> YearRange {
        YearRange::up_to((self.current_year)())
    }
}
