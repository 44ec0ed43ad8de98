//! Employees

use std::fmt;

use thiserror::Error;

use crate::{
    entities::{Displayable, person::Person},
    ids::TypedId,
    pricing::Amount,
    repository::Record,
};

/// Employee identifier
pub type EmployeeId = TypedId<Employee>;

/// Errors raised while building or changing an employee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeError {
    /// The salary was below zero.
    #[error("salary cannot be negative, got {0}")]
    NegativeSalary(String),
}

/// A salary amount, never below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salary(Amount);

impl Salary {
    /// Validate and wrap a salary amount.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeError::NegativeSalary`] if `amount` is below zero.
    pub fn new(amount: Amount) -> Result<Self, EmployeeError> {
        if amount.is_negative() {
            return Err(EmployeeError::NegativeSalary(amount.to_string()));
        }

        Ok(Salary(amount))
    }

    /// The salary amount.
    pub fn amount(&self) -> &Amount {
        &self.0
    }
}

impl TryFrom<Amount> for Salary {
    type Error = EmployeeError;

    fn try_from(amount: Amount) -> Result<Self, Self::Error> {
        Salary::new(amount)
    }
}

/// New Employee
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// Name and national id
    pub person: Person,

    /// Job title
    pub position: String,

    /// Validated salary
    pub salary: Salary,
}

/// Employee
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    person: Person,
    position: String,
    salary: Salary,
}

impl Employee {
    /// Employee identifier
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Name and national id
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// National identity document number
    pub fn national_id(&self) -> &str {
        &self.person.national_id
    }

    /// Job title
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Current salary
    pub fn salary(&self) -> &Amount {
        self.salary.amount()
    }

    /// Replace the salary.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeError::NegativeSalary`] if `amount` is below zero, in which
    /// case the employee keeps its previous salary.
    pub fn set_salary(&mut self, amount: Amount) -> Result<(), EmployeeError> {
        self.salary = Salary::new(amount)?;

        Ok(())
    }
}

impl Record for Employee {
    type Draft = NewEmployee;

    fn from_draft(id: EmployeeId, draft: NewEmployee) -> Self {
        Employee {
            id,
            person: draft.person,
            position: draft.position,
            salary: draft.salary,
        }
    }

    fn id(&self) -> EmployeeId {
        self.id
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, {}, Position: {}, Salary: {}",
            self.id,
            self.person,
            self.position,
            self.salary()
        )
    }
}

impl Displayable for Employee {
    fn greeting(&self) -> String {
        format!("Hi, I'm {} and I work as {}.", self.name(), self.position)
    }
}
