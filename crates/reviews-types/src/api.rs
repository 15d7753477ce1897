use serde::{Deserialize, Serialize};

use crate::models::Review;

// -- Submit --

/// Body of a review submission.
///
/// Both fields are optional at the type level so that a missing field can be
/// told apart from an empty one. Unknown fields (a client-supplied
/// `created_at`, say) are ignored rather than rejected.
#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub name: Option<String>,
    pub review: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub success: bool,
    pub review: Review,
}

// -- List --

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
}

// -- Admin --

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteReviewResponse {
    pub success: bool,
    pub deleted: bool,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_tolerates_missing_and_extra_fields() {
        let req: SubmitReviewRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.review.is_none());

        let req: SubmitReviewRequest = serde_json::from_str(
            r#"{"name":"Bob","review":null,"created_at":1,"timestamp":"forged"}"#,
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Bob"));
        assert!(req.review.is_none());
    }

    #[test]
    fn submit_request_rejects_non_string_fields() {
        let result = serde_json::from_str::<SubmitReviewRequest>(r#"{"name":5,"review":"x"}"#);
        assert!(result.is_err());
    }
}
