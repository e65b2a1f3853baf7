use serde::{Deserialize, Serialize};

/// Library admin signup request (`POST /adminsignup`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSignupRequest {
    #[serde(rename = "Library_name")]
    pub library_name: String,
    pub address: String,
    pub email: String,
    pub password: String,
}

/// Message body returned by the backend alongside error statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_uses_backend_field_names() {
        let request = AdminSignupRequest {
            library_name: "Central".to_string(),
            address: "12 High Street".to_string(),
            email: "admin@central.org".to_string(),
            password: "hunter22".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["Library_name"], "Central");
        assert_eq!(json["address"], "12 High Street");
        assert!(json.get("library_name").is_none());
    }

    #[test]
    fn test_message_response_tolerates_missing_message() {
        let empty: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);

        let full: MessageResponse = serde_json::from_str(r#"{"message":"Email already exists"}"#).unwrap();
        assert_eq!(full.message.as_deref(), Some("Email already exists"));
    }
}
