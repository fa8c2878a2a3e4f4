//! Dependency injection with `Reader`.
//!
//! [`rename_user_in`] describes the rename without knowing where the
//! database lives. Running the returned `Reader` with an [`Environment`]
//! picks the store.

use monadic::effect::Reader;

use crate::database::Database;

/// The dependencies a workflow reads at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Location of the database.
    pub path: String,
}

impl Environment {
    /// Builds an environment pointing at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Local store used while testing.
    pub fn test() -> Self {
        Self::new("path_to_sqlite")
    }

    /// Store used in production.
    pub fn production() -> Self {
        Self::new("path_to_realm")
    }
}

/// Renames a user in whichever database the environment names.
///
/// Nothing happens until the returned `Reader` is run, and it can be run
/// against any number of environments.
///
/// # Examples
///
/// ```rust
/// use monadic_playground::{Environment, rename_user_in};
///
/// let rename = rename_user_in("dummy_id", "Thor");
/// assert_eq!(rename.run(Environment::test()), "Thor in: path_to_sqlite");
/// assert_eq!(rename.run(Environment::production()), "Thor in: path_to_realm");
/// ```
pub fn rename_user_in(user_id: &str, new_name: &str) -> Reader<Environment, String> {
    let user_id = user_id.to_string();
    let new_name = new_name.to_string();
    Reader::new(move |environment: Environment| {
        let database = Database::new(environment.path);
        let mut user = database.find_user(&user_id);
        user.name.clone_from(&new_name);
        database.update_user(&user)
    })
}
