//! Grouped totals over a loan collection.
//!
//! Loans are partitioned by a caller-chosen key and every partition is folded into
//! running totals. All partitions end up in the same three sums, so the key only
//! decides the label of the result.

use crate::{domain::responses::LoanAggregateResponse, model::loan::LoanModel};
use std::{collections::BTreeMap, fmt, ops::Add};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Lender,
    Customer,
    Interest,
}

impl GroupBy {
    pub fn label(self) -> &'static str {
        match self {
            GroupBy::Lender => "Lender",
            GroupBy::Customer => "Customer",
            GroupBy::Interest => "Interest",
        }
    }

    pub fn aggregate(self, loans: &[LoanModel]) -> LoanAggregateResponse {
        match self {
            GroupBy::Lender => aggregate(loans, |loan| loan.lender_id.clone(), self.label()),
            GroupBy::Customer => aggregate(loans, |loan| loan.customer_id.clone(), self.label()),
            // f64 has no total order; the bit pattern is a stable grouping key
            GroupBy::Interest => {
                aggregate(loans, |loan| loan.interest_per_day.to_bits(), self.label())
            }
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoanTotals {
    pub remaining_amount: f64,
    pub interest: f64,
    pub penalty: f64,
}

impl LoanTotals {
    pub fn of(loan: &LoanModel) -> Self {
        Self {
            remaining_amount: loan.remaining_amount,
            interest: loan.interest_per_day * loan.amount,
            penalty: loan.penalty_per_day * loan.amount,
        }
    }

    pub fn into_response(self, label: &str) -> LoanAggregateResponse {
        LoanAggregateResponse {
            group_by: label.to_string(),
            total_remaining_amount: self.remaining_amount,
            total_interest: self.interest,
            total_penalty: self.penalty,
        }
    }
}

impl Add for LoanTotals {
    type Output = LoanTotals;

    fn add(self, rhs: Self) -> Self::Output {
        LoanTotals {
            remaining_amount: self.remaining_amount + rhs.remaining_amount,
            interest: self.interest + rhs.interest,
            penalty: self.penalty + rhs.penalty,
        }
    }
}

/// Partitions `loans` by `key_fn`, in key order for reproducible float sums.
pub fn group_loans<'a, K, F>(loans: &'a [LoanModel], key_fn: F) -> BTreeMap<K, Vec<&'a LoanModel>>
where
    K: Ord,
    F: Fn(&LoanModel) -> K,
{
    let mut groups: BTreeMap<K, Vec<&LoanModel>> = BTreeMap::new();

    for loan in loans {
        groups.entry(key_fn(loan)).or_default().push(loan);
    }

    groups
}

/// Single pass over the ungrouped collection.
pub fn sum_loans<'a, I>(loans: I) -> LoanTotals
where
    I: IntoIterator<Item = &'a LoanModel>,
{
    loans
        .into_iter()
        .fold(LoanTotals::default(), |acc, loan| acc + LoanTotals::of(loan))
}

pub fn aggregate<K, F>(loans: &[LoanModel], key_fn: F, label: &str) -> LoanAggregateResponse
where
    K: Ord,
    F: Fn(&LoanModel) -> K,
{
    group_loans(loans, key_fn)
        .values()
        .map(|group| sum_loans(group.iter().copied()))
        .fold(LoanTotals::default(), Add::add)
        .into_response(label)
}
