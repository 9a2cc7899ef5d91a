//! Errors raised while computing a group's balance.
//!
//! Every variant rejects the whole computation: a partially applied expense
//! list would hand the caller wrong figures.
use thiserror::Error;

use crate::schemas::MemberId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("\"{0}\" appears more than once in the member list")]
    DuplicateMember(MemberId),
    #[error("Invalid amount {amount} in expense \"{expense}\"")]
    InvalidAmount { expense: String, amount: f64 },
    #[error("Expense \"{0}\" is not split between anyone")]
    EmptySplit(String),
    #[error("Expense \"{expense}\" references unknown member \"{member}\"")]
    UnknownMember { expense: String, member: MemberId },
    #[error("Balance of \"{0}\" is too large to represent")]
    Overflow(MemberId),
}
