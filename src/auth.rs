use crate::database::UserDb;
use crate::error::{Error, Result};
use crate::model::{Role, User};
use log::debug;
use std::sync::Arc;

/// Checks credentials against the user store and roles against what an
/// operation needs. The only place roles are inspected.
#[derive(Clone)]
pub struct Guard {
    users: Arc<dyn UserDb>,
}

impl Guard {
    pub fn new(users: Arc<dyn UserDb>) -> Self {
        Guard { users }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        self.users
            .load_users()?
            .into_iter()
            .find(|user| user.username == username && password_matches(&user.password, password))
            .ok_or_else(|| {
                debug!("rejected credentials for {:?}", username);
                Error::Unauthorized
            })
    }

    pub fn authorize(user: &User, required: Role) -> Result<()> {
        let allowed = match required {
            Role::Regular => true,
            Role::Admin => match user.role {
                Role::Admin => true,
                Role::Regular => false,
            },
        };
        if allowed {
            Ok(())
        } else {
            debug!("{} lacks {:?} role", user.username, required);
            Err(Error::Forbidden)
        }
    }
}

fn is_bcrypt_hash(stored: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| stored.starts_with(prefix))
}

fn password_matches(stored: &str, given: &str) -> bool {
    if is_bcrypt_hash(stored) {
        bcrypt::verify(given, stored).unwrap_or_else(|err| {
            debug!("{:?}", err);
            false
        })
    } else {
        stored == given
    }
}
