//! Net balances for a group of people sharing expenses.
//!
//! [`compute_balances`] is a pure function over a roster and its expenses;
//! [`summarize`] turns the result into "Gets X" / "Owes X" lines. The
//! [`routes`] module exposes both over HTTP.
pub mod balance;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod summary;

pub use balance::{compute_balance_from_group, compute_balances, Balance};
pub use error::BalanceError;
pub use schemas::{Expense, Group, Member, MemberId};
pub use summary::{describe, round_to_2_decimals, summarize, BalanceLine, Direction};
