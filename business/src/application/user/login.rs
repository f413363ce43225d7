use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::user::value_objects::Email;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, UserError> {
        // A malformed address cannot belong to any account.
        let email = Email::parse(&params.email).map_err(|_| UserError::InvalidCredentials)?;

        let user = match self.repository.get_by_email(&email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                // Unknown e-mails pay one hash so they answer as slowly as a wrong password.
                let _ = self.hasher.hash(&params.password);
                return Err(UserError::InvalidCredentials);
            }
            Err(other) => return Err(UserError::Repository(other)),
        };

        if !self.hasher.verify(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Failed login attempt for {}", email));
            return Err(UserError::InvalidCredentials);
        }

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(user)
    }
}
