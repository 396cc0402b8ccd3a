//! Sign-in credentials as submitted by the sign-in form.
//!
//! Credentials are validated once and discarded after the authentication
//! attempt; they are never persisted.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::Entity,
    error::ValidationError,
    schema::{EntitySchema, FieldDef, FieldKind, Record, Rule},
    value_objects::EntityKind,
};

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const PASSWORD_REQUIRED: &str = "Password is required";

pub static SIGNIN_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Signin,
    fields: &[
        FieldDef::required("username", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 3,
            message: USERNAME_TOO_SHORT,
        }]),
        FieldDef::required("password", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 1,
            message: PASSWORD_REQUIRED,
        }]),
    ],
};

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SigninCredentials {
    username: String,
    password: String,
}

impl SigninCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for SigninCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigninCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Entity for SigninCredentials {
    const KIND: EntityKind = EntityKind::Signin;

    fn from_record(mut record: Record) -> Result<Self, ValidationError> {
        Ok(Self {
            username: record.text("username")?,
            password: record.text("password")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn valid_credentials_come_back_unchanged() {
        let creds = SigninCredentials::validate(&json!({"username": "joanna", "password": "s3cret"}))
            .unwrap();
        assert_eq!(creds.username(), "joanna");
        assert_eq!(creds.password(), "s3cret");
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({"username": "joanna", "password": "s3cret"})
        );
    }

    #[test]
    fn short_username_reports_only_username() {
        let err = SigninCredentials::validate(&json!({"username": "jo", "password": "x"}))
            .unwrap_err();
        assert_eq!(err.messages_for("username"), [USERNAME_TOO_SHORT]);
        assert!(!err.has_field("password"));
        assert_eq!(err.violation_count(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("ab")]
    fn usernames_under_three_characters_fail(#[case] username: &str) {
        let err = SigninCredentials::validate(&json!({"username": username, "password": "pw"}))
            .unwrap_err();
        assert_eq!(err.messages_for("username"), [USERNAME_TOO_SHORT]);
    }

    #[test]
    fn empty_password_is_rejected() {
        let err = SigninCredentials::validate(&json!({"username": "joanna", "password": ""}))
            .unwrap_err();
        assert_eq!(err.messages_for("password"), [PASSWORD_REQUIRED]);
    }

    #[test]
    fn debug_redacts_password() {
        let creds =
            SigninCredentials::validate(&json!({"username": "joanna", "password": "s3cret"}))
                .unwrap();
        let printed = format!("{creds:?}");
        assert!(printed.contains("joanna"));
        assert!(!printed.contains("s3cret"));
    }
}
