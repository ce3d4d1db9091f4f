use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned user identifier. The backing column is `AUTO_INCREMENT`,
/// so ids are allocated exactly once and not reused after deletion.
#[derive(
    Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
