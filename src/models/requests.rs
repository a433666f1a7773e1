use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Request to find teachers around a point
///
/// Any numeric coordinates and radius are accepted; an omitted `radius_km`
/// falls back to the configured default, while an explicit `null` is a
/// malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_finite"))]
pub struct NearbyRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "deserialize_radius")]
    pub radius_km: Option<f64>,
}

// Only reached when the field is present, so `null` fails as a non-number
fn deserialize_radius<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

fn validate_finite(request: &NearbyRequest) -> Result<(), ValidationError> {
    let fields = [
        ("latitude", Some(request.latitude)),
        ("longitude", Some(request.longitude)),
        ("radius_km", request.radius_km),
    ];

    for (field, value) in fields {
        if value.is_some_and(|v| !v.is_finite()) {
            let mut err = ValidationError::new("non_finite");
            err.message = Some(format!("{} must be a finite number", field).into());
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_optional() {
        let request: NearbyRequest =
            serde_json::from_str(r#"{"latitude": 22.7196, "longitude": 75.8577}"#).unwrap();

        assert_eq!(request.radius_km, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_coordinate_fails_to_parse() {
        let result = serde_json::from_str::<NearbyRequest>(r#"{"latitude": 22.7196}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_coordinate_fails_to_parse() {
        let result = serde_json::from_str::<NearbyRequest>(
            r#"{"latitude": "north", "longitude": 75.8577}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_null_radius_fails_to_parse() {
        let result = serde_json::from_str::<NearbyRequest>(
            r#"{"latitude": 22.7196, "longitude": 75.8577, "radius_km": null}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_camel_case_radius_is_ignored() {
        let request: NearbyRequest = serde_json::from_str(
            r#"{"latitude": 22.7196, "longitude": 75.8577, "radiusKm": 50.0}"#,
        )
        .unwrap();

        assert_eq!(request.radius_km, None);
    }

    #[test]
    fn test_explicit_radius_parses() {
        let request: NearbyRequest = serde_json::from_str(
            r#"{"latitude": 22.7196, "longitude": 75.8577, "radius_km": 12.5}"#,
        )
        .unwrap();

        assert_eq!(request.radius_km, Some(12.5));
    }

    #[test]
    fn test_zero_radius_is_valid() {
        let request = NearbyRequest {
            latitude: 0.0,
            longitude: 0.0,
            radius_km: Some(0.0),
        };

        assert!(request.validate().is_ok());
    }
}
