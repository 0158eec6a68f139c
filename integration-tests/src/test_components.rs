//! Callables shared by the integration tests.

use std::{cell::Cell, convert::Infallible};

use intercept_core::Callable;
use thiserror::Error;

/// Adds two numbers and counts how often it was called.
#[derive(Debug, Default)]
pub struct CountingAdder {
    calls: Cell<usize>,
}

impl CountingAdder {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Callable for CountingAdder {
    type Input = (i64, i64);
    type Output = i64;
    type Error = Infallible;

    fn call(&self, (a, b): Self::Input) -> Result<Self::Output, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(a + b)
    }

    fn doc(&self) -> Option<&str> {
        Some("Add two numbers")
    }
}

/// Named arguments for [`Withdraw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawInput {
    pub balance: u64,
    pub amount: u64,
}

/// Subtracts an amount from a balance, refusing to overdraw.
#[derive(Debug, Default)]
pub struct Withdraw;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WithdrawError {
    #[error("cannot withdraw {amount} from a balance of {balance}")]
    InsufficientFunds { balance: u64, amount: u64 },
}

impl Callable for Withdraw {
    type Input = WithdrawInput;
    type Output = u64;
    type Error = WithdrawError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let WithdrawInput { balance, amount } = input;
        balance
            .checked_sub(amount)
            .ok_or(WithdrawError::InsufficientFunds { balance, amount })
    }
}
