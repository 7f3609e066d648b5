//! Response body types returned by backend endpoints.

use serde::{Deserialize, Serialize};

/// Category as returned by `GET /category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
}

/// Login response. The token is optional so a malformed body can be
/// reported as a missing token instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

/// User record as returned by `GET /user` and `GET /user/{email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ignores_extra_fields() {
        let body = r#"[{"id":"a1","title":"Trilha","createdAt":"2026-01-01"}]"#;
        let categories: Vec<Category> = serde_json::from_str(body).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Trilha");
    }

    #[test]
    fn test_login_without_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"user":"x"}"#).unwrap();
        assert!(resp.access_token.is_none());
    }

    #[test]
    fn test_user_lookup_null_body() {
        let user: Option<UserRecord> = serde_json::from_str("null").unwrap();
        assert!(user.is_none());

        let body = r#"{"id":"u1","name":"Tree Trip","email":"treetrip@email.com","userRole":"AGENCY","passwordHash":"x","agency":{"id":"u1"}}"#;
        let user: Option<UserRecord> = serde_json::from_str(body).unwrap();
        let user = user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.user_role.as_deref(), Some("AGENCY"));
        assert!(user.phone.is_none());
    }
}
