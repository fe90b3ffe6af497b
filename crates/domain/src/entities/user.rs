//! Registered user.

use chrono::{DateTime, Utc};
use common::PasswordHasher;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::value_objects::{
    Birthdate, Email, FirstName, LastName, MaritalStatus, PasswordHash, UserId,
};

/// Raw registration input, validated field by field inside
/// [`User::new`].
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub marital_status: &'a str,
    pub birth_date: DateTime<Utc>,
    pub password: &'a str,
}

/// A registered user.
///
/// Email uniqueness is the registration use case's job (query before
/// create), not a constraint visible here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    first_name: FirstName,
    last_name: LastName,
    birth_date: Birthdate,
    marital_status: MaritalStatus,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Validates every field in order and hashes the password.
    ///
    /// The first failing field aborts construction; the raw password is
    /// checked and hashed last so no hash work happens for otherwise
    /// invalid input.
    pub fn new(
        input: NewUser<'_>,
        hasher: &dyn PasswordHasher,
        user_uuid: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let email = Email::new(input.email)?;
        let first_name = FirstName::new(input.first_name)?;
        let last_name = LastName::new(input.last_name)?;
        let marital_status = MaritalStatus::parse(input.marital_status)?;
        let birth_date = Birthdate::new(input.birth_date, now)?;
        let password_hash = PasswordHash::new(hasher, input.password)?;

        Ok(Self {
            id: UserId::from_uuid_unchecked(user_uuid),
            email,
            first_name,
            last_name,
            birth_date,
            marital_status,
            password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// "First Last", skipping empty parts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns the user id.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    /// Returns the birthdate.
    pub fn birth_date(&self) -> Birthdate {
        self.birth_date
    }

    /// Returns the marital status.
    pub fn marital_status(&self) -> MaritalStatus {
        self.marital_status
    }

    /// Returns the stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-delete time, if deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::PlainTextHasher;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    fn input() -> NewUser<'static> {
        NewUser {
            email: "ada@example.com",
            first_name: "Ada",
            last_name: "Lovelace",
            marital_status: "single",
            birth_date: Utc.with_ymd_and_hms(1990, 12, 10, 3, 0, 0).unwrap(),
            password: "verysecret",
        }
    }

    #[test]
    fn constructs_valid_user() {
        let user = User::new(input(), &PlainTextHasher::new(), Uuid::from_u128(7), now()).unwrap();

        assert_eq!(user.email().as_str(), "ada@example.com");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.marital_status(), MaritalStatus::Single);
        assert!(!user.id().is_nil());
        assert_ne!(user.password_hash().as_str(), "verysecret");
    }

    #[test]
    fn rejects_invalid_email_first() {
        let mut input = input();
        input.email = "not-an-email";
        // Password is also bad, but email is validated first.
        input.password = "short";

        let err = User::new(input, &PlainTextHasher::new(), Uuid::from_u128(7), now()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn rejects_underage_user() {
        let mut input = input();
        input.birth_date = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();

        let err = User::new(input, &PlainTextHasher::new(), Uuid::from_u128(7), now()).unwrap_err();
        assert_eq!(err, ValidationError::AgeTooLow);
    }

    #[test]
    fn rejects_short_password() {
        let mut input = input();
        input.password = "1234567";

        let err = User::new(input, &PlainTextHasher::new(), Uuid::from_u128(7), now()).unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort { actual: 7 });
    }

    #[test]
    fn rejects_unknown_marital_status() {
        let mut input = input();
        input.marital_status = "unsure";

        let err = User::new(input, &PlainTextHasher::new(), Uuid::from_u128(7), now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownMaritalStatus("unsure".to_string())
        );
    }
}
