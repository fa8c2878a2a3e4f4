//! A stand-in for a user database.
//!
//! Nothing is stored: lookups fabricate a user and updates print the line a
//! real write would have produced.

/// Location of the database used by [`rename_user`].
pub const DB_PATH: &str = "path_to_db";

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

/// Handle to the database at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: String,
}

impl Database {
    /// Opens the database at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The location this handle points at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Looks up a user. Every id resolves to a 29 year old named after the id.
    pub fn find_user(&self, user_id: &str) -> User {
        tracing::debug!(user_id, path = %self.path, "looking up user");
        User {
            name: user_id.to_string(),
            age: 29,
        }
    }

    /// Writes `user` back, printing `"<name> in: <path>"` and returning the
    /// same line.
    pub fn update_user(&self, user: &User) -> String {
        let line = format!("{} in: {}", user.name, self.path);
        println!("{line}");
        tracing::info!(name = %user.name, path = %self.path, "updated user");
        line
    }
}

/// Renames a user in the database at [`DB_PATH`].
///
/// The location is fixed, so this cannot be pointed at another store without
/// changing the constant. [`rename_user_in`](crate::rename_user_in) is the
/// injected version.
pub fn rename_user(user_id: &str, new_name: &str) -> String {
    let database = Database::new(DB_PATH);
    let mut user = database.find_user(user_id);
    user.name = new_name.to_string();
    database.update_user(&user)
}
