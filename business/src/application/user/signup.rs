use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::signup::{SignupParams, SignupUseCase};
use crate::domain::user::value_objects::{Email, validate_password};

pub struct SignupUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignupUseCase for SignupUseCaseImpl {
    async fn execute(&self, params: SignupParams) -> Result<User, UserError> {
        if params.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }
        let email = Email::parse(&params.email)?;
        validate_password(&params.password)?;

        self.logger.info(&format!("Signing up user {}", email));

        if self.repository.exists_by_email(&email).await? {
            self.logger
                .warn(&format!("Signup rejected, email already registered: {}", email));
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&params.password)?;
        let user = User::new(&params.name, email, password_hash)?;

        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User created: {}", user.id));
        Ok(user)
    }
}
