use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when an account identifier is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("account id must be a positive integer, got {0}")]
pub struct InvalidAccountId(pub i64);

/// Identifier of the account a purchase is charged to.
///
/// Any positive integer is a valid account; whether the account exists
/// or can pay is the payment provider's concern, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an account ID, returning `None` unless `id` is positive.
    pub fn new(id: i64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Returns the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(InvalidAccountId(id))
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}
