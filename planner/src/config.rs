use leptos::prelude::*;

/// Texts shown in the status line.
#[derive(Clone, Debug)]
pub struct Messages {
    pub no_availability: String,
    pub submitting: String,
    pub success: String,
    pub failure: String,
}

#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Path of the submit endpoint, relative to the page origin.
    pub endpoint: String,
    pub messages: Messages,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            endpoint: String::from("/api/submit"),
            messages: Messages {
                no_availability: String::from("空いている日・時間を1つ以上入力してください。"),
                submitting: String::from("送信中…"),
                success: String::from("送信しました。ありがとうございます！"),
                failure: String::from("送信に失敗しました。時間をおいて再度お試しください。"),
            },
        }
    }
}

pub fn provide_config(config: PlannerConfig) {
    provide_context(config);
}

pub fn use_config() -> PlannerConfig {
    use_context::<PlannerConfig>().unwrap_or_default()
}
