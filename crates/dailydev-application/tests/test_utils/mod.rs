//! Test doubles for the crypto ports
//!
//! Repositories are the real in-memory providers; only hashing and token
//! signing are replaced so the use case tests stay fast and deterministic.

use dailydev_application::{AuthService, IssuedToken, PasswordHasher, TodoService, TokenService};
use dailydev_domain::error::{Error, Result};
use dailydev_providers::database::{MemoryDailyTodoRepository, MemoryUserRepository};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const HASH_PREFIX: &str = "hashed:";
const TOKEN_PREFIX: &str = "token-";

/// Reversible "hash" that still exercises the verify path
#[derive(Default)]
pub struct PlainHasher {
    verifications: AtomicUsize,
}

impl PlainHasher {
    /// Number of `verify` calls so far
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        match hash.strip_prefix(HASH_PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(Error::authentication("Unsupported hash format")),
        }
    }
}

/// Token equal to `token-{user_id}`
pub struct PlainTokens;

impl TokenService for PlainTokens {
    fn issue(&self, user_id: &str) -> Result<IssuedToken> {
        Ok(IssuedToken {
            token: format!("{TOKEN_PREFIX}{user_id}"),
            expires_at: u64::MAX,
        })
    }

    fn verify(&self, token: &str) -> Result<String> {
        token
            .strip_prefix(TOKEN_PREFIX)
            .map(str::to_string)
            .ok_or_else(|| Error::authentication("Invalid token"))
    }
}

pub struct AuthFixture {
    pub users: Arc<MemoryUserRepository>,
    pub hasher: Arc<PlainHasher>,
    pub service: AuthService,
}

pub fn auth_fixture() -> AuthFixture {
    let users = Arc::new(MemoryUserRepository::new());
    let hasher = Arc::new(PlainHasher::default());
    let service = AuthService::new(users.clone(), hasher.clone(), Arc::new(PlainTokens));
    AuthFixture {
        users,
        hasher,
        service,
    }
}

pub fn todo_service() -> TodoService {
    TodoService::new(Arc::new(MemoryDailyTodoRepository::new()))
}
