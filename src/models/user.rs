//! User model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use crate::error::{BudgetLensError, BudgetLensResult};

/// The owner of one or more budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> BudgetLensResult<()> {
        if self.name.trim().is_empty() {
            return Err(BudgetLensError::Validation("user name cannot be empty".into()));
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(BudgetLensError::Validation(format!(
                "invalid email address: {}",
                self.email
            ))),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
