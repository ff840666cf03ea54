use dto::plan::PlanDto;
use thiserror::Error;

use super::rows::RowList;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one availability window is required")]
    NoAvailability,
}

/// Everything the form holds at the moment it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanDraft {
    pub name: String,
    pub area: String,
    pub food_dislike: String,
    pub food_weak: String,
    pub food_cant: String,
    pub food_want: String,
    pub rows: RowList,
}

impl PlanDraft {
    pub fn into_payload(self) -> Result<PlanDto, ValidationError> {
        let availabilities = self.rows.complete();
        if availabilities.is_empty() {
            return Err(ValidationError::NoAvailability);
        }

        Ok(PlanDto {
            name: self.name.trim().to_string(),
            area: self.area.trim().to_string(),
            availabilities,
            food_dislike: self.food_dislike.trim().to_string(),
            food_weak: self.food_weak.trim().to_string(),
            food_cant: self.food_cant.trim().to_string(),
            food_want: self.food_want.trim().to_string(),
        })
    }
}
