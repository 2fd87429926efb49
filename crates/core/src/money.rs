//! Money: an amount in the smallest unit of a currency.

use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// ISO currency code (e.g. "GBP"), compared case-sensitively.
    currency: String,
    /// Amount in smallest currency unit (e.g., pence).
    amount: i64,
}

impl Money {
    pub fn new(currency: impl Into<String>, amount: i64) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Sum of two amounts in the same currency.
    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::validation(format!(
                "cannot add {} to {}",
                other.currency, self.currency
            )));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(self.currency.clone(), amount))
    }

    /// Amount multiplied by a scalar.
    pub fn checked_mul(&self, factor: i64) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(self.currency.clone(), amount))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = DomainResult<Money>;

    fn add(self, rhs: Money) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Add for &Money {
    type Output = DomainResult<Money>;

    fn add(self, rhs: &Money) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Mul<i64> for Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Mul<i64> for &Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
