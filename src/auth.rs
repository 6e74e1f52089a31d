// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::TypedHeader;
use headers::authorization::Basic;
use headers::Authorization;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ApiError;

/// Username -> plaintext password table, loaded once at startup and never
/// mutated by any exposed operation.
#[derive(Default, Debug)]
pub struct UserTable {
    users: HashMap<String, String>,
}

impl UserTable {
    pub fn from_map(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|expected| expected == password)
    }
}

/// Basic-auth guard layered over every route. Absent credentials, an unknown
/// user, and a wrong password all collapse into the same 401 body.
pub async fn require_basic_auth(
    State(users): State<Arc<UserTable>>,
    credentials: Option<TypedHeader<Authorization<Basic>>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match credentials {
        Some(TypedHeader(auth)) if users.verify(auth.username(), auth.password()) => {
            tracing::debug!("Authenticated request for user {}", auth.username());
            Ok(next.run(req).await)
        }
        Some(TypedHeader(auth)) => {
            tracing::debug!("Rejected credentials for user {}", auth.username());
            Err(ApiError::Unauthorized)
        }
        None => Err(ApiError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_known_user() {
        let mut map = HashMap::new();
        map.insert("admin".to_string(), "secret".to_string());
        let table = UserTable::from_map(map);

        assert!(table.verify("admin", "secret"));
        assert!(!table.verify("admin", "wrong"));
        assert!(!table.verify("nobody", "secret"));
    }

    #[test]
    fn test_empty_table_rejects_everyone() {
        let table = UserTable::default();
        assert!(table.is_empty());
        assert!(!table.verify("admin", ""));
    }
}
