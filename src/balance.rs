use std::collections::HashMap;

use crate::error::BalanceError;
use crate::schemas::{Expense, Group, Member, MemberId};

/// Net position per member: positive is owed money, negative owes money.
pub type Balance = HashMap<MemberId, f64>;

pub fn compute_balance_from_group(group: &Group) -> Result<Balance, BalanceError> {
    compute_balances(&group.members, &group.expenses)
}

/// Every member starts at zero. Each expense credits its payer with the full
/// amount and debits every listed participant an equal share. Values are
/// left unrounded.
pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
) -> Result<Balance, BalanceError> {
    if members.is_empty() {
        if !expenses.is_empty() {
            tracing::debug!("{} expenses ignored for an empty roster", expenses.len());
        }
        return Ok(Balance::new());
    }

    let mut balance = Balance::with_capacity(members.len());
    for member in members {
        if balance.insert(member.id.clone(), 0.0).is_some() {
            return Err(BalanceError::DuplicateMember(member.id.clone()));
        }
    }

    for expense in expenses {
        validate_expense(&balance, expense)?;

        let amount = expense.amount;
        let amount_per_receiver = amount / expense.split_between_ids.len() as f64;
        // Keys were checked by validate_expense
        if let Some(v) = balance.get_mut(&expense.paid_by_id) {
            *v += amount;
        }
        for receiver in &expense.split_between_ids {
            if let Some(v) = balance.get_mut(receiver) {
                *v -= amount_per_receiver;
            }
        }
    }
    // Infinities never return to a finite value, so one pass at the end is enough
    if let Some(member) = members.iter().find(|m| !balance[&m.id].is_finite()) {
        tracing::warn!("balance of {} overflowed", member.id);
        return Err(BalanceError::Overflow(member.id.clone()));
    }
    tracing::debug!(
        "computed balance for {} members over {} expenses",
        members.len(),
        expenses.len()
    );
    Ok(balance)
}

fn validate_expense(balance: &Balance, expense: &Expense) -> Result<(), BalanceError> {
    if !expense.amount.is_finite() || expense.amount <= 0.0 {
        tracing::warn!("rejecting expense {}: amount {}", expense.id, expense.amount);
        return Err(BalanceError::InvalidAmount {
            expense: expense.id.clone(),
            amount: expense.amount,
        });
    }
    if expense.split_between_ids.is_empty() {
        tracing::warn!("rejecting expense {}: empty split", expense.id);
        return Err(BalanceError::EmptySplit(expense.id.clone()));
    }
    let unknown = std::iter::once(&expense.paid_by_id)
        .chain(&expense.split_between_ids)
        .find(|id| !balance.contains_key(*id));
    if let Some(member) = unknown {
        tracing::warn!("rejecting expense {}: unknown member {member}", expense.id);
        return Err(BalanceError::UnknownMember {
            expense: expense.id.clone(),
            member: member.clone(),
        });
    }
    Ok(())
}
