//! Request and response shapes for the person endpoints.
//!
//! Each field declares its constraints exactly once; the declaration is read
//! by two independent collaborators. The `validator` derive enforces it when
//! a request arrives, and the `utoipa` schema attributes publish it in the
//! OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Fixed message returned by the login endpoint.
pub const LOGIN_MESSAGE: &str = "Login successfully";

/// Closed set of hair colours. Display and validation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

/// Free-form location. Accepted alongside a person update and shallow-merged
/// into the response; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    #[validate(length(min = 1))]
    #[schema(min_length = 1, example = "Marbella")]
    pub city: String,
    #[validate(length(min = 1))]
    #[schema(min_length = 1, example = "Málaga")]
    pub state: String,
    #[validate(length(min = 1))]
    #[schema(min_length = 1, example = "Spain")]
    pub country: String,
}

/// Inbound person shape.
///
/// Deliberately does not implement `Serialize`: the password must never be
/// echoed, so responses go through [`PersonOut`] instead.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Person {
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "Miguel")]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "Torres")]
    pub last_name: String,
    /// Age in years; zero is rejected.
    #[validate(range(min = 1, max = 100))]
    #[schema(minimum = 1, maximum = 100, example = 25)]
    pub age: u8,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
    #[validate(length(min = 8))]
    #[schema(min_length = 8, write_only, example = "s3cr3tpass")]
    pub password: String,
}

/// Outbound person shape: [`Person`] minus the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonOut {
    #[schema(example = "Miguel")]
    pub first_name: String,
    #[schema(example = "Torres")]
    pub last_name: String,
    #[schema(example = 25)]
    pub age: u8,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

/// The password-stripping contract: converting to the output shape drops the
/// field by construction.
impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            hair_color: person.hair_color,
            is_married: person.is_married,
        }
    }
}

/// Response shape for the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginOut {
    #[schema(max_length = 20, example = "migue2022")]
    pub username: String,
    #[serde(default = "default_login_message")]
    #[schema(default = "Login successfully", example = "Login successfully")]
    pub message: String,
}

impl LoginOut {
    #[must_use]
    pub fn new(username: String) -> Self {
        Self {
            username,
            message: default_login_message(),
        }
    }
}

fn default_login_message() -> String {
    LOGIN_MESSAGE.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid_person() -> Person {
        Person {
            first_name: "Miguel".into(),
            last_name: "Torres".into(),
            age: 25,
            hair_color: Some(HairColor::Black),
            is_married: Some(false),
            password: "anything8+".into(),
        }
    }

    #[rstest]
    #[case(1, true)]
    #[case(100, true)]
    #[case(0, false)]
    #[case(101, false)]
    fn age_bounds_are_exclusive_below_and_inclusive_above(#[case] age: u8, #[case] ok: bool) {
        let mut person = valid_person();
        person.age = age;
        assert_eq!(person.validate().is_ok(), ok, "age {age}");
    }

    #[rstest]
    #[case("", false)]
    #[case("M", true)]
    #[case(&"x".repeat(50), true)]
    #[case(&"x".repeat(51), false)]
    fn name_length_is_bounded(#[case] name: &str, #[case] ok: bool) {
        let mut person = valid_person();
        person.first_name = name.to_owned();
        assert_eq!(person.validate().is_ok(), ok);
    }

    #[rstest]
    #[case("1234567", false)]
    #[case("12345678", true)]
    fn password_requires_eight_characters(#[case] password: &str, #[case] ok: bool) {
        let mut person = valid_person();
        person.password = password.to_owned();
        assert_eq!(person.validate().is_ok(), ok);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let person: Person = serde_json::from_value(json!({
            "first_name": "Miguel",
            "last_name": "Torres",
            "age": 25,
            "password": "anything8+"
        }))
        .expect("deserialize");
        assert!(person.hair_color.is_none());
        assert!(person.is_married.is_none());
        person.validate().expect("valid");
    }

    #[test]
    fn hair_color_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(HairColor::Blonde).expect("serialize"),
            json!("blonde")
        );
        let parsed: HairColor = serde_json::from_value(json!("red")).expect("deserialize");
        assert_eq!(parsed, HairColor::Red);
        assert!(serde_json::from_value::<HairColor>(json!("green")).is_err());
    }

    #[test]
    fn person_out_drops_the_password() {
        let out = PersonOut::from(valid_person());
        let value = serde_json::to_value(out).expect("serialize");
        assert!(value.get("password").is_none());
        assert_eq!(value.get("first_name"), Some(&json!("Miguel")));
    }

    #[test]
    fn login_out_defaults_its_message() {
        let out = LoginOut::new("migue2022".into());
        assert_eq!(out.message, LOGIN_MESSAGE);
        let parsed: LoginOut =
            serde_json::from_value(json!({ "username": "migue2022" })).expect("deserialize");
        assert_eq!(parsed.message, LOGIN_MESSAGE);
    }
}
