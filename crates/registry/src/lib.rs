//! Durable user registry backed by `sea-orm`.
//!
//! The registry owns the two-table schema created by the `migration`
//! crate: `roles` (seed data) and `users` (append-only). The only write
//! path is [`Registry::register`], an insert-if-absent keyed by the
//! unique `username` index: a unique-constraint violation is treated as
//! "already exists" rather than surfaced as an error, so two clients
//! racing on the same new username both settle on the same row.

use sea_orm::{ActiveValue, DatabaseConnection, QueryFilter, SqlErr, entity::prelude::*};

pub use error::RegistryError;

mod error;
pub mod roles;
pub mod users;

type ResultRegistry<T> = Result<T, RegistryError>;

/// Handle to the durable User/Role store.
#[derive(Clone, Debug)]
pub struct Registry {
    database: DatabaseConnection,
}

impl Registry {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Look up a user by username.
    pub async fn find_user(&self, username: &str) -> ResultRegistry<Option<users::Model>> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.database)
            .await
            .map_err(Into::into)
    }

    /// Insert a user if the username is absent.
    ///
    /// Returns the row together with `true` when this call created it.
    /// The insert relies on the storage-level unique index instead of a
    /// check-then-insert, so a conflicting concurrent insert resolves to
    /// the existing row with `false`.
    pub async fn register(&self, username: &str) -> ResultRegistry<(users::Model, bool)> {
        let candidate = users::ActiveModel {
            username: ActiveValue::Set(username.to_owned()),
            ..Default::default()
        };

        match candidate.insert(&self.database).await {
            Ok(user) => Ok((user, true)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let user = self
                    .find_user(username)
                    .await?
                    .ok_or_else(|| RegistryError::Corrupted(username.to_owned()))?;
                Ok((user, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Look up a role by its label.
    pub async fn role(&self, name: &str) -> ResultRegistry<Option<roles::Model>> {
        roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .one(&self.database)
            .await
            .map_err(Into::into)
    }

    /// Enumerate the users referencing a role.
    pub async fn users_with_role(&self, role: &roles::Model) -> ResultRegistry<Vec<users::Model>> {
        role.find_related(users::Entity)
            .all(&self.database)
            .await
            .map_err(Into::into)
    }
}
