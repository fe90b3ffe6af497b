//! User registration: validate, check email uniqueness, persist.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{Clock, IdGenerator, PasswordHasher};
use domain::{NewUser, User};
use tracing::{debug, error};

use crate::commands::{CreateUserCommand, CreateUserHandler};
use crate::error::{ConfigError, RepositoryError, UseCaseError};
use crate::queries::{GetUserByEmailHandler, GetUserByEmailQuery};

/// Raw registration input for [`UserRegistration::run`].
#[derive(Debug, Clone)]
pub struct UserRegistrationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub marital_status: String,
    pub birth_date: DateTime<Utc>,
    pub password: String,
}

/// Registers a new user.
///
/// Runs without a transaction: the uniqueness check and the insert are
/// two separate store calls, so concurrent registrations of the same
/// email race down to the store's own unique constraint. Validation
/// happens entirely before any write; a user that fails validation
/// never reaches the repository.
pub struct UserRegistration {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    hasher: Arc<dyn PasswordHasher>,
    get_user: GetUserByEmailHandler,
    create_user: CreateUserHandler,
}

impl std::fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegistration").finish_non_exhaustive()
    }
}

impl UserRegistration {
    /// Starts a builder; every dependency is required.
    pub fn builder() -> UserRegistrationBuilder {
        UserRegistrationBuilder::default()
    }

    /// Registers the user and returns the persisted record.
    #[tracing::instrument(
        name = "user_registration",
        skip(self, request),
        fields(email = %request.email)
    )]
    pub async fn run(&self, request: UserRegistrationRequest) -> Result<User, UseCaseError> {
        debug!("usecase started");

        // Email syntax first; a malformed address never hits the store.
        let query = GetUserByEmailQuery::new(&request.email)?;

        match self.get_user.handle(&query).await {
            Ok(_) => {
                error!("email already registered");
                return Err(UseCaseError::UserAlreadyExists);
            }
            Err(RepositoryError::UserNotFound) => {}
            Err(other) => return Err(other.into()),
        }

        let user = User::new(
            NewUser {
                email: &request.email,
                first_name: &request.first_name,
                last_name: &request.last_name,
                marital_status: &request.marital_status,
                birth_date: request.birth_date,
                password: &request.password,
            },
            self.hasher.as_ref(),
            self.ids.new_id(),
            self.clock.now(),
        )?;

        self.create_user
            .handle(&CreateUserCommand::new(user.clone()))
            .await?;

        debug!(user_id = %user.id(), "user registered");

        Ok(user)
    }
}

/// Two-phase construction for [`UserRegistration`].
#[derive(Default)]
pub struct UserRegistrationBuilder {
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    hasher: Option<Arc<dyn PasswordHasher>>,
    get_user: Option<GetUserByEmailHandler>,
    create_user: Option<CreateUserHandler>,
}

impl UserRegistrationBuilder {
    /// Sets the clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the id generator.
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Sets the password hasher.
    pub fn password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Sets the user query handler.
    pub fn get_user(mut self, handler: GetUserByEmailHandler) -> Self {
        self.get_user = Some(handler);
        self
    }

    /// Sets the user insert handler.
    pub fn create_user(mut self, handler: CreateUserHandler) -> Self {
        self.create_user = Some(handler);
        self
    }

    /// Finalizes the use case, erroring on the first missing
    /// dependency.
    pub fn build(self) -> Result<UserRegistration, ConfigError> {
        Ok(UserRegistration {
            clock: self
                .clock
                .ok_or(ConfigError::MissingDependency("clock"))?,
            ids: self
                .ids
                .ok_or(ConfigError::MissingDependency("id_generator"))?,
            hasher: self
                .hasher
                .ok_or(ConfigError::MissingDependency("password_hasher"))?,
            get_user: self
                .get_user
                .ok_or(ConfigError::MissingDependency("get_user"))?,
            create_user: self
                .create_user
                .ok_or(ConfigError::MissingDependency("create_user"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{PlainTextHasher, SystemClock, UuidGenerator};

    #[test]
    fn build_reports_first_missing_dependency() {
        let err = UserRegistration::builder()
            .clock(Arc::new(SystemClock))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingDependency("id_generator"));
    }

    #[test]
    fn build_with_partial_wiring_still_fails() {
        let err = UserRegistration::builder()
            .clock(Arc::new(SystemClock))
            .id_generator(Arc::new(UuidGenerator))
            .password_hasher(Arc::new(PlainTextHasher::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingDependency("get_user"));
    }
}
