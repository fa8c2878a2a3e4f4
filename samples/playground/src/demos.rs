//! The values each playground section prints.
//!
//! Every function returns the lines of its section, already formatted with
//! `Debug`, so the binary only has to print them and tests can compare them.

use monadic::prelude::*;

use crate::database::rename_user;
use crate::error::Doomsday;
use crate::injection::{Environment, rename_user_in};

/// Halves even numbers. Odd numbers have no half.
pub fn half(value: i32) -> Maybe<i32> {
    if value % 2 == 0 {
        Maybe::Just(value / 2)
    } else {
        Maybe::Nothing
    }
}

/// A Reader that halves its input, ignoring the environment.
pub fn half_reader(value: f32) -> Reader<f32, f32> {
    Reader::new(move |_| value / 2.0)
}

/// `fmap` over a present and an absent value.
pub fn functors() -> Vec<String> {
    vec![
        format!("{:?}", Maybe::Just(3).fmap(|i| i + 2)),
        format!("{:?}", Maybe::<i32>::Nothing.fmap(|i| i + 3)),
    ]
}

/// Applying wrapped functions to a `Maybe` and to a list.
pub fn applicatives() -> Vec<String> {
    let add_three: Maybe<fn(i32) -> i32> = Maybe::Just(|i| i + 3);
    let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
    vec![
        format!("{:?}", Maybe::Just(2).ap(add_three)),
        format!("{:?}", vec![1, 2, 3].ap(functions)),
    ]
}

/// `flat_map` with [`half`], ending with the three step chain from 20.
pub fn monads() -> Vec<String> {
    vec![
        format!("{:?}", Maybe::Just(3).flat_map(half)),
        format!("{:?}", Maybe::Just(4).flat_map(half)),
        format!("{:?}", Maybe::<i32>::Nothing.flat_map(half)),
        format!(
            "{:?}",
            Maybe::Just(20).flat_map(half).flat_map(half).flat_map(half)
        ),
    ]
}

/// The environment, halved three times.
pub fn halving_reader() -> Reader<f32, f32> {
    Reader::ask()
        .flat_map(half_reader)
        .flat_map(half_reader)
        .flat_map(half_reader)
}

/// [`halving_reader`] run with 20.
pub fn reader_halving() -> Vec<String> {
    vec![format!("{:?}", halving_reader().run(20.0))]
}

/// The rename workflow against the fixed path and against both environments.
///
/// The database prints each line as it writes it. The same lines are
/// returned in order.
pub fn reader_renames() -> Vec<String> {
    let rename = rename_user_in("dummy_id", "Thor");
    vec![
        rename_user("dummy_id", "Thor"),
        rename.run(Environment::test()),
        rename.run(Environment::production()),
    ]
}

/// A computation that always fails with [`Doomsday::Bang`].
pub fn end_of_the_world() -> Try<i32, Doomsday> {
    Try::new(|| Err(Doomsday::Bang))
}

/// A successful division chained into [`end_of_the_world`].
pub fn try_monad() -> Vec<String> {
    let divided: Try<i32, Doomsday> = Try::new(|| Ok(4 / 2));
    let result = divided.flat_map(|_| end_of_the_world());
    vec![format!("{result:?}")]
}
