use std::fmt;

use serde::Serialize;

use crate::balance::Balance;
use crate::schemas::{Member, MemberId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Gets,
    Owes,
}

/// One rendered row of a balance report.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceLine {
    pub member_id: MemberId,
    pub name: String,
    pub direction: Direction,
    /// Absolute amount, rounded to cents.
    pub amount: f64,
}

impl fmt::Display for BalanceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.direction {
            Direction::Gets => "Gets",
            Direction::Owes => "Owes",
        };
        write!(f, "{verb} {:.2}", self.amount)
    }
}

pub fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

pub fn describe(net: f64) -> (Direction, f64) {
    let rounded = round_to_2_decimals(net);
    if rounded > 0.0 {
        (Direction::Gets, rounded)
    } else {
        // abs() also turns -0.0 into 0.0
        (Direction::Owes, rounded.abs())
    }
}

/// Builds display lines in roster order. Members missing from `balance`
/// are shown as settled.
pub fn summarize(members: &[Member], balance: &Balance) -> Vec<BalanceLine> {
    members
        .iter()
        .map(|member| {
            let net = balance.get(&member.id).copied().unwrap_or_default();
            let (direction, amount) = describe(net);
            BalanceLine {
                member_id: member.id.clone(),
                name: member.name.clone(),
                direction,
                amount,
            }
        })
        .collect()
}
