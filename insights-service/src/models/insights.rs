use serde::Deserialize;
use validator::Validate;

/// Message returned for a missing or empty `region`.
pub const REGION_REQUIRED: &str = "Region is required.";

/// Body of `POST /generate-insights`.
///
/// The success payload is deliberately untyped: whatever JSON object the model
/// produced is forwarded as a `serde_json::Value`.
#[derive(Debug, Deserialize, Validate)]
pub struct InsightRequest {
    #[validate(
        required(message = "Region is required."),
        length(min = 1, message = "Region is required.")
    )]
    #[serde(default)]
    pub region: Option<String>,
}

impl InsightRequest {
    /// Decode and validate a raw request body, yielding the region.
    pub fn region_from_slice(body: &[u8]) -> Option<String> {
        let request: InsightRequest = serde_json::from_slice(body).ok()?;
        request.validate().ok()?;
        request.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_region() {
        assert_eq!(
            InsightRequest::region_from_slice(br#"{"region":"Karnataka"}"#).as_deref(),
            Some("Karnataka")
        );
    }

    #[test]
    fn rejects_missing_null_and_empty_region() {
        assert_eq!(InsightRequest::region_from_slice(br#"{}"#), None);
        assert_eq!(InsightRequest::region_from_slice(br#"{"region":null}"#), None);
        assert_eq!(InsightRequest::region_from_slice(br#"{"region":""}"#), None);
    }

    #[test]
    fn rejects_unusable_bodies() {
        assert_eq!(InsightRequest::region_from_slice(b""), None);
        assert_eq!(InsightRequest::region_from_slice(b"not json"), None);
        assert_eq!(InsightRequest::region_from_slice(br#"{"region":42}"#), None);
        assert_eq!(InsightRequest::region_from_slice(br#""Kerala""#), None);
    }

    #[test]
    fn whitespace_region_is_passed_through() {
        assert_eq!(
            InsightRequest::region_from_slice(br#"{"region":"  "}"#).as_deref(),
            Some("  ")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        assert_eq!(
            InsightRequest::region_from_slice(br#"{"region":"Goa","extra":true}"#).as_deref(),
            Some("Goa")
        );
    }
}
