use serde::{Deserialize, Serialize};

use crate::error::BalanceError;

pub type MemberId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub amount: f64,
    pub paid_by_id: MemberId,
    pub split_between_ids: Vec<MemberId>,
}

/// A group's roster and the expenses logged against it. Expenses point at
/// members by id only.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub members: Vec<Member>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Expense {
    pub fn new<I, S>(
        id: impl Into<String>,
        amount: f64,
        paid_by_id: impl Into<MemberId>,
        split: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MemberId>,
    {
        Self {
            id: id.into(),
            name: String::new(),
            amount,
            paid_by_id: paid_by_id.into(),
            split_between_ids: split.into_iter().map(Into::into).collect(),
        }
    }
}

impl Group {
    pub fn new(members: Vec<Member>, expenses: Vec<Expense>) -> Self {
        Self { members, expenses }
    }

    /// Returns a new group with `member` appended to the roster.
    pub fn with_member(mut self, member: Member) -> Result<Self, BalanceError> {
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(BalanceError::DuplicateMember(member.id));
        }
        self.members.push(member);
        Ok(self)
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_uses_camel_case_keys() {
        let json = r#"{"id":"e1","amount":12.5,"paidById":"a","splitBetweenIds":["a","b"]}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense, Expense::new("e1", 12.5, "a", ["a", "b"]));
    }

    #[test]
    fn with_member_leaves_original_untouched() {
        let group = Group::new(vec![Member::new("a", "Alice")], vec![]);
        let grown = group.clone().with_member(Member::new("b", "Bob")).unwrap();

        assert_eq!(group.members.len(), 1);
        assert_eq!(grown.members.len(), 2);
        assert_eq!(grown.member("b").map(|m| m.name.as_str()), Some("Bob"));
    }

    #[test]
    fn with_expense_appends_in_order() {
        let group = Group::default()
            .with_expense(Expense::new("e1", 1.0, "a", ["a"]))
            .with_expense(Expense::new("e2", 2.0, "a", ["a"]));
        let ids: Vec<&str> = group.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e2"]);
    }

    #[test]
    fn with_member_rejects_duplicate_id() {
        let group = Group::new(vec![Member::new("a", "Alice")], vec![]);
        let err = group.with_member(Member::new("a", "Another Alice")).unwrap_err();
        assert_eq!(err, BalanceError::DuplicateMember("a".to_string()));
    }
}
