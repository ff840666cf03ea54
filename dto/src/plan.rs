use serde::{Deserialize, Serialize};

/// Longest name the submit endpoint accepts.
pub const NAME_MAX_LEN: usize = 100;
/// Longest area description the submit endpoint accepts.
pub const AREA_MAX_LEN: usize = 200;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityDto {
    pub date: String,
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanDto {
    pub name: String,
    pub area: String,
    pub availabilities: Vec<AvailabilityDto>,
    #[serde(default)]
    pub food_dislike: String,
    #[serde(default)]
    pub food_weak: String,
    #[serde(default)]
    pub food_cant: String,
    #[serde(default)]
    pub food_want: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitResponseDto {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_serializes_with_endpoint_field_names() {
        let plan = PlanDto {
            name: String::from("Taro"),
            area: String::from("Shibuya"),
            availabilities: vec![AvailabilityDto {
                date: String::from("2024-05-01"),
                start: String::from("18:00"),
                end: String::from("20:00"),
            }],
            food_dislike: String::new(),
            food_weak: String::from("natto"),
            food_cant: String::new(),
            food_want: String::from("ramen"),
        };

        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Taro",
                "area": "Shibuya",
                "availabilities": [
                    { "date": "2024-05-01", "start": "18:00", "end": "20:00" }
                ],
                "food_dislike": "",
                "food_weak": "natto",
                "food_cant": "",
                "food_want": "ramen"
            })
        );
    }

    #[test]
    fn response_without_ok_flag_is_not_ok() {
        let response: SubmitResponseDto =
            serde_json::from_str(r#"{"error": "server busy"}"#).unwrap();

        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("server busy"));
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let response: SubmitResponseDto =
            serde_json::from_str(r#"{"ok": true, "id": 12}"#).unwrap();

        assert_eq!(
            response,
            SubmitResponseDto {
                ok: true,
                error: None
            }
        );
    }
}
