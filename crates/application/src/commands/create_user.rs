//! Persist a newly registered user.

use std::sync::Arc;

use async_trait::async_trait;
use domain::User;

use crate::error::RepositoryError;

/// Port for inserting users.
#[async_trait]
pub trait UserCreator: Send + Sync {
    /// Inserts the user. Uniqueness violations surface as whatever
    /// error the store reports; the use case has already checked by
    /// email.
    async fn create_user(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Write intent carrying the user to insert.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    user: User,
}

impl CreateUserCommand {
    /// Wraps the user.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Returns the user.
    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Forwards commands to the port.
#[derive(Clone)]
pub struct CreateUserHandler {
    repo: Arc<dyn UserCreator>,
}

impl CreateUserHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn UserCreator>) -> Self {
        Self { repo }
    }

    /// Executes the command.
    pub async fn handle(&self, command: &CreateUserCommand) -> Result<(), RepositoryError> {
        self.repo.create_user(command.user()).await
    }
}
