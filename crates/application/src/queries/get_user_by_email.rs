//! Fetch one user by email.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Email, User, ValidationError};

use crate::error::RepositoryError;

/// Port for reading users.
#[async_trait]
pub trait UserGetter: Send + Sync {
    /// Fetches the user owning the given email; must return
    /// [`RepositoryError::UserNotFound`] when absent.
    async fn get_by_email(&self, email: &Email) -> Result<User, RepositoryError>;
}

/// Validated fetch intent.
#[derive(Debug, Clone)]
pub struct GetUserByEmailQuery {
    email: Email,
}

impl GetUserByEmailQuery {
    /// Validates the raw address and builds the query.
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::new(email)?,
        })
    }

    /// Returns the validated email.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Forwards validated queries to the port.
#[derive(Clone)]
pub struct GetUserByEmailHandler {
    repo: Arc<dyn UserGetter>,
}

impl GetUserByEmailHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn UserGetter>) -> Self {
        Self { repo }
    }

    /// Executes the query.
    pub async fn handle(&self, query: &GetUserByEmailQuery) -> Result<User, RepositoryError> {
        self.repo.get_by_email(query.email()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_validates_email_up_front() {
        assert!(GetUserByEmailQuery::new("").is_err());
        assert!(GetUserByEmailQuery::new("no-at-sign").is_err());
        assert!(GetUserByEmailQuery::new("user@example.com").is_ok());
    }
}
