//! Customer registration and login.
//!
//! Plaintext password comparison by design: this is a single-user demo and
//! hardening authentication is an explicit non-goal.

use thiserror::Error;
use tracing::info;

use tangelo_core::Email;

use crate::db::{CustomerRepository, RepositoryError};
use crate::models::{Address, Customer};

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email is already registered.
    #[error("email '{0}' is already registered")]
    EmailTaken(Email),

    /// No account exists for the email.
    #[error("email '{0}' is not registered")]
    UnknownEmail(Email),

    /// The password does not match.
    #[error("incorrect password")]
    WrongPassword,

    /// The customer store could not be written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Registration and login against the customer store.
#[derive(Debug, Clone)]
pub struct AuthService {
    customers: CustomerRepository,
}

impl AuthService {
    /// Create an auth service over a customer repository.
    #[must_use]
    pub const fn new(customers: CustomerRepository) -> Self {
        Self { customers }
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already registered,
    /// or a repository error if the new record cannot be saved.
    pub fn register(
        &self,
        name: &str,
        email: Email,
        password: &str,
        address: Address,
    ) -> Result<Customer, AuthError> {
        if self.customers.find_by_email(&email).is_some() {
            return Err(AuthError::EmailTaken(email));
        }

        let customer = Customer::new(name, email, password, address);
        self.customers.save(&customer)?;
        info!(customer_id = %customer.customer_id, "customer registered");
        Ok(customer)
    }

    /// Authenticate a customer login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownEmail` or `AuthError::WrongPassword` when
    /// the credentials do not match a stored customer.
    pub fn login(&self, email: &Email, password: &str) -> Result<Customer, AuthError> {
        let customer = self
            .customers
            .find_by_email(email)
            .ok_or_else(|| AuthError::UnknownEmail(email.clone()))?;

        if customer.password != password {
            return Err(AuthError::WrongPassword);
        }

        info!(customer_id = %customer.customer_id, "customer logged in");
        Ok(customer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "1 Main St".to_string(),
            city: "Town".to_string(),
            postal_code: "00001".to_string(),
            country: "USA".to_string(),
        }
    }

    fn service(dir: &tempfile::TempDir) -> AuthService {
        AuthService::new(CustomerRepository::new(&dir.path().join("customers.json")))
    }

    #[test]
    fn test_register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);
        let email = Email::parse("ada@example.com").unwrap();

        let registered = auth.register("Ada", email.clone(), "pw", address()).unwrap();
        let logged_in = auth.login(&email, "pw").unwrap();
        assert_eq!(logged_in, registered);
    }

    #[test]
    fn test_register_duplicate_email() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);
        let email = Email::parse("ada@example.com").unwrap();

        auth.register("Ada", email.clone(), "pw", address()).unwrap();
        assert!(matches!(
            auth.register("Other Ada", email, "pw2", address()),
            Err(AuthError::EmailTaken(_))
        ));
    }

    #[test]
    fn test_login_unknown_email() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);
        let email = Email::parse("nobody@example.com").unwrap();
        assert!(matches!(
            auth.login(&email, "pw"),
            Err(AuthError::UnknownEmail(_))
        ));
    }

    #[test]
    fn test_login_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(&dir);
        let email = Email::parse("ada@example.com").unwrap();
        auth.register("Ada", email.clone(), "pw", address()).unwrap();

        assert!(matches!(
            auth.login(&email, "wrong"),
            Err(AuthError::WrongPassword)
        ));
    }
}
