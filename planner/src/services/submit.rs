use dto::plan::{PlanDto, SubmitResponseDto};
use leptos::prelude::window;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("could not read page origin: {0}")]
    Location(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(
        "submission rejected with status {status}: {}",
        .message.as_deref().unwrap_or("no reason given")
    )]
    Rejected { status: u16, message: Option<String> },
    #[error("response with status {status} is not valid JSON: {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl SubmitError {
    /// The server's own reason when it sent one, `generic` otherwise.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => generic.to_string(),
        }
    }
}

pub fn endpoint_url(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Accepts only a 2xx status whose JSON body carries `ok: true`.
pub fn read_response(status: u16, body: &str) -> Result<(), SubmitError> {
    let response: SubmitResponseDto = serde_json::from_str(body)
        .map_err(|source| SubmitError::MalformedResponse { status, source })?;

    if (200..300).contains(&status) && response.ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status,
            message: response.error.filter(|m| !m.trim().is_empty()),
        })
    }
}

pub async fn submit_plan(endpoint: &str, plan: &PlanDto) -> Result<(), SubmitError> {
    let origin = window()
        .location()
        .origin()
        .map_err(|e| SubmitError::Location(format!("{:?}", e)))?;

    let response = reqwest::Client::new()
        .post(endpoint_url(&origin, endpoint))
        .json(plan)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    read_response(status, &body)
}
