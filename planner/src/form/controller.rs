use dto::plan::PlanDto;
use leptos::prelude::*;

use super::{draft::PlanDraft, rows::RowList};
use crate::{
    components::status::{Status, StatusContext},
    config::Messages,
    services::submit::SubmitError,
};

/// Reactive state of the planner form. Created once by the page and copied into
/// every handler that needs it.
#[derive(Clone, Copy, Debug)]
pub struct PlanForm {
    pub name: RwSignal<String>,
    pub area: RwSignal<String>,
    pub food_dislike: RwSignal<String>,
    pub food_weak: RwSignal<String>,
    pub food_cant: RwSignal<String>,
    pub food_want: RwSignal<String>,
    pub rows: RwSignal<RowList>,
    pub status: RwSignal<Status>,
}

impl PlanForm {
    pub fn new() -> Self {
        PlanForm {
            name: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            food_dislike: RwSignal::new(String::new()),
            food_weak: RwSignal::new(String::new()),
            food_cant: RwSignal::new(String::new()),
            food_want: RwSignal::new(String::new()),
            rows: RwSignal::new(RowList::new()),
            status: RwSignal::new(Status::default()),
        }
    }

    pub fn snapshot(&self) -> PlanDraft {
        PlanDraft {
            name: self.name.get_untracked(),
            area: self.area.get_untracked(),
            food_dislike: self.food_dislike.get_untracked(),
            food_weak: self.food_weak.get_untracked(),
            food_cant: self.food_cant.get_untracked(),
            food_want: self.food_want.get_untracked(),
            rows: self.rows.get_untracked(),
        }
    }

    /// Blanks every text field and leaves exactly one fresh row. The status is
    /// left alone so the caller can report the outcome afterwards.
    pub fn reset(&self) {
        for field in [
            self.name,
            self.area,
            self.food_dislike,
            self.food_weak,
            self.food_cant,
            self.food_want,
        ] {
            field.set(String::new());
        }
        self.rows.update(|list| list.reset());
    }

    /// Validates the current input. Returns the payload to send, or `None`
    /// after reporting why nothing can be sent. While an earlier submission is
    /// still `pending` nothing happens and the status is left as it is.
    pub fn begin_submission(&self, pending: bool, messages: &Messages) -> Option<PlanDto> {
        if pending {
            return None;
        }
        self.status.clear();
        match self.snapshot().into_payload() {
            Ok(plan) => {
                self.status.info(&messages.submitting);
                Some(plan)
            }
            Err(e) => {
                self.status.error(&messages.no_availability, e);
                None
            }
        }
    }

    pub fn finish_submission(&self, result: Result<(), SubmitError>, messages: &Messages) {
        match result {
            Ok(()) => {
                self.reset();
                self.status.success(&messages.success);
            }
            Err(e) => self.status.error(&e.user_message(&messages.failure), e),
        }
    }
}

impl Default for PlanForm {
    fn default() -> Self {
        PlanForm::new()
    }
}
