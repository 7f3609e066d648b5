//! Request body types for backend endpoints.

use std::fmt;

use serde::Serialize;

/// Login request body for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Category creation request for `POST /category`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub title: String,
}

/// Account payload shared by admin, agency and business registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRegistration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Tourist registration payload for `POST /tourist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristRegistration {
    pub name: String,
    pub lastname: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub password: String,
    /// Category ids, must be non-empty.
    pub favorite_categories: Vec<String>,
}

/// Role-typed user accounts that have their own registration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Tourist,
    Agency,
    Business,
}

impl UserKind {
    /// Endpoint path used to register this kind of user.
    pub fn endpoint(self) -> &'static str {
        match self {
            UserKind::Tourist => "/tourist",
            UserKind::Agency => "/agency",
            UserKind::Business => "/business",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserKind::Tourist => "tourist",
            UserKind::Agency => "agency",
            UserKind::Business => "business",
        }
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registration payload for one of the role-typed endpoints.
///
/// Serializes as the inner payload only; the variant selects the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserRegistration {
    Tourist(TouristRegistration),
    Agency(AccountRegistration),
    Business(AccountRegistration),
}

impl UserRegistration {
    pub fn kind(&self) -> UserKind {
        match self {
            UserRegistration::Tourist(_) => UserKind::Tourist,
            UserRegistration::Agency(_) => UserKind::Agency,
            UserRegistration::Business(_) => UserKind::Business,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UserRegistration::Tourist(tourist) => &tourist.email,
            UserRegistration::Agency(account) | UserRegistration::Business(account) => {
                &account.email
            }
        }
    }
}

/// Days an establishment can be open, in canonical week order.
///
/// The derived `Ord` follows declaration order, so sorting a subset
/// always yields Monday..Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OpenDay {
    #[serde(rename = "Segunda")]
    Monday,
    #[serde(rename = "Terça")]
    Tuesday,
    #[serde(rename = "Quarta")]
    Wednesday,
    #[serde(rename = "Quinta")]
    Thursday,
    #[serde(rename = "Sexta")]
    Friday,
    #[serde(rename = "Sábado")]
    Saturday,
    #[serde(rename = "Domingo")]
    Sunday,
}

impl OpenDay {
    pub const ALL: [OpenDay; 7] = [
        OpenDay::Monday,
        OpenDay::Tuesday,
        OpenDay::Wednesday,
        OpenDay::Thursday,
        OpenDay::Friday,
        OpenDay::Saturday,
        OpenDay::Sunday,
    ];

    /// Portuguese day name as the backend stores it.
    pub fn as_str(self) -> &'static str {
        match self {
            OpenDay::Monday => "Segunda",
            OpenDay::Tuesday => "Terça",
            OpenDay::Wednesday => "Quarta",
            OpenDay::Thursday => "Quinta",
            OpenDay::Friday => "Sexta",
            OpenDay::Saturday => "Sábado",
            OpenDay::Sunday => "Domingo",
        }
    }
}

/// Attraction creation request for `POST /attraction/{agencyId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttraction {
    pub name: String,
    /// RFC 3339 timestamp with the Sao Paulo offset.
    pub date: String,
    pub location: String,
    pub found_in_attraction: String,
    pub not_found_in_attraction: String,
    pub categories: Vec<String>,
    pub pricing: String,
    pub description: String,
    pub what_to_take: Vec<String>,
}

/// Establishment creation request for `POST /establishment/{businessId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEstablishment {
    pub name: String,
    pub description: String,
    pub open_hours: String,
    pub close_hours: String,
    pub min_price: String,
    pub max_price: String,
    pub location: String,
    pub open_days: Vec<OpenDay>,
    pub found_in_establishment: String,
    pub other_information: String,
    pub phone: String,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(email: &str) -> AccountRegistration {
        AccountRegistration {
            name: "Tree Trip".to_string(),
            phone: "+55067991881014".to_string(),
            email: email.to_string(),
            password: "2022@Tree".to_string(),
        }
    }

    #[test]
    fn test_tourist_uses_camel_case_keys() {
        let tourist = TouristRegistration {
            name: "Lucas".to_string(),
            lastname: "Bezerra".to_string(),
            age: 23,
            phone: "+55067991882244".to_string(),
            email: "lucas@email.com".to_string(),
            password: "2022@Lucas".to_string(),
            favorite_categories: vec!["c1".to_string()],
        };

        let value = serde_json::to_value(&tourist).unwrap();
        assert_eq!(value["favoriteCategories"], json!(["c1"]));
        assert_eq!(value["age"], json!(23));
        assert!(value.get("favorite_categories").is_none());
    }

    #[test]
    fn test_registration_serializes_inner_payload() {
        let registration = UserRegistration::Agency(account("treetrip@email.com"));
        let value = serde_json::to_value(&registration).unwrap();

        assert_eq!(value["email"], json!("treetrip@email.com"));
        assert!(value.get("Agency").is_none());
        assert_eq!(registration.kind(), UserKind::Agency);
        assert_eq!(registration.email(), "treetrip@email.com");
    }

    #[test]
    fn test_user_kind_endpoints() {
        assert_eq!(UserKind::Tourist.endpoint(), "/tourist");
        assert_eq!(UserKind::Agency.endpoint(), "/agency");
        assert_eq!(UserKind::Business.endpoint(), "/business");
    }

    #[test]
    fn test_open_days_sort_into_week_order() {
        let mut days = vec![OpenDay::Sunday, OpenDay::Wednesday, OpenDay::Monday];
        days.sort();
        assert_eq!(days, vec![OpenDay::Monday, OpenDay::Wednesday, OpenDay::Sunday]);

        let value = serde_json::to_value(&days).unwrap();
        assert_eq!(value, json!(["Segunda", "Quarta", "Domingo"]));
    }

    #[test]
    fn test_open_day_names_match_serialization() {
        for day in OpenDay::ALL {
            assert_eq!(serde_json::to_value(day).unwrap(), json!(day.as_str()));
        }
    }

    #[test]
    fn test_establishment_keys() {
        let establishment = NewEstablishment {
            name: "Bar Taboa".to_string(),
            description: "d".to_string(),
            open_hours: "2026-10-16T10:00:00-03:00".to_string(),
            close_hours: "2026-10-16T22:00:00-03:00".to_string(),
            min_price: "80".to_string(),
            max_price: "200".to_string(),
            location: "Brasil".to_string(),
            open_days: vec![OpenDay::Friday],
            found_in_establishment: "f".to_string(),
            other_information: "o".to_string(),
            phone: "+5506701009910".to_string(),
            categories: vec!["c1".to_string()],
        };

        let value = serde_json::to_value(&establishment).unwrap();
        for key in [
            "openHours",
            "closeHours",
            "minPrice",
            "maxPrice",
            "openDays",
            "foundInEstablishment",
            "otherInformation",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["openDays"], json!(["Sexta"]));
    }
}
