//! Prediction endpoint wire types.

use serde::{Deserialize, Serialize};

use crate::number::WireNumber;
use crate::verdict::Verdict;

/// Request body POSTed to the prediction endpoint.
///
/// `tags` stays the raw pipe-delimited string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub likes: WireNumber,
    pub dislikes: WireNumber,
    pub comment_count: WireNumber,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub publish_hour: WireNumber,
    pub publish_day: WireNumber,
}

/// Response body of the prediction endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub viral: bool,
}

impl PredictionResponse {
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.viral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = PredictionRequest {
            likes: WireNumber::parse("5000"),
            dislikes: WireNumber::INVALID,
            comment_count: WireNumber::parse("2.5"),
            title: "Title".to_string(),
            description: String::new(),
            tags: "a|b".to_string(),
            publish_hour: WireNumber::parse("18"),
            publish_day: WireNumber::parse("4"),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "likes": 5000,
                "dislikes": null,
                "comment_count": 2.5,
                "title": "Title",
                "description": "",
                "tags": "a|b",
                "publish_hour": 18,
                "publish_day": 4
            })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"viral": true, "probability": 0.93}"#).unwrap();
        assert!(response.viral);
        assert_eq!(response.verdict(), Verdict::LikelyViral);
    }

    #[test]
    fn test_response_requires_viral() {
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"probability": 0.2}"#).is_err());
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"viral": "yes"}"#).is_err());
    }
}
