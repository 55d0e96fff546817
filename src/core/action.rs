//! Action representation: a canonical string token.
//!
//! The grammar of a token is owned by each game: `"r,c"` for a cell,
//! `"r,c,v"` for a value placement, `"U"` for a direction, a whole word for
//! a word ladder. An action is legal only if it appears in the state's
//! legal-action set; parsing a token never makes it legal on its own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ActionError;

/// A game action.
///
/// ## Example
///
/// ```
/// use duel_arena::core::Action;
///
/// let place = Action::cell(1, 2);
/// assert_eq!(place.as_str(), "1,2");
/// assert_eq!(place.fields_exact::<2>(',', "row,col").unwrap(), [1, 2]);
///
/// assert!(Action::pass().is_pass());
/// assert!(Action::new("1;2").fields_exact::<2>(',', "row,col").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// Token of the forced pass used by games that allow one.
    pub const PASS: &'static str = "pass";

    /// Create an action from a raw token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The `"pass"` sentinel.
    #[must_use]
    pub fn pass() -> Self {
        Self::new(Self::PASS)
    }

    /// A `"row,col"` cell token.
    #[must_use]
    pub fn cell(row: usize, col: usize) -> Self {
        Self(format!("{row},{col}"))
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the pass sentinel.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.0 == Self::PASS
    }

    /// Split the token on `sep` and parse every field as an unsigned integer.
    ///
    /// Fields must be in canonical decimal form (no sign, no leading zeros),
    /// so every accepted token round-trips to the same string. `expected`
    /// names the grammar for the error message.
    pub fn fields(&self, sep: char, expected: &'static str) -> Result<SmallVec<[usize; 3]>, ActionError> {
        self.0
            .split(sep)
            .map(|field| match field.parse::<usize>() {
                Ok(n) if n.to_string() == field => Ok(n),
                _ => Err(self.malformed(expected)),
            })
            .collect()
    }

    /// Like [`Action::fields`], requiring exactly `N` fields.
    pub fn fields_exact<const N: usize>(&self, sep: char, expected: &'static str) -> Result<[usize; N], ActionError> {
        let fields = self.fields(sep, expected)?;
        <[usize; N]>::try_from(fields.as_slice()).map_err(|_| self.malformed(expected))
    }

    /// Build a malformed-action error for this token.
    #[must_use]
    pub fn malformed(&self, expected: &'static str) -> ActionError {
        ActionError::Malformed {
            action: self.0.clone(),
            expected,
        }
    }

    /// Build an illegal-action error for this token.
    #[must_use]
    pub fn illegal(&self) -> ActionError {
        ActionError::Illegal { action: self.0.clone() }
    }

    /// Build a game-over error for this token.
    #[must_use]
    pub fn game_over(&self) -> ActionError {
        ActionError::GameOver { action: self.0.clone() }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Action {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Action {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Convert a list of tokens into actions.
pub fn actions<I, S>(tokens: I) -> Vec<Action>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Action::new).collect()
}
