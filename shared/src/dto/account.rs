use serde::{Deserialize, Serialize};

/// Current user as returned by `GET /user`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Borrow request (`POST /borrow`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BorrowRequest {
    #[serde(rename = "bookId")]
    pub book_id: String,
    #[serde(rename = "libraryId")]
    pub library_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_request_wire_names() {
        let request = BorrowRequest {
            book_id: "b1".to_string(),
            library_id: "l1".to_string(),
            user_id: "u1".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"bookId":"b1","libraryId":"l1","userId":"u1"}"#);
    }

    #[test]
    fn test_account_info_ignores_extra_fields() {
        let info: AccountInfo = serde_json::from_str(
            r#"{"_id":"u1","name":"Ada","education":"BSc","email":"ada@example.com","password":"x"}"#,
        )
        .unwrap();

        assert_eq!(info.name.as_deref(), Some("Ada"));
        assert_eq!(info.education.as_deref(), Some("BSc"));
    }
}
