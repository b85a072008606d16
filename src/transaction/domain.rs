//! Core transaction domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, project::ProjectId};

/// Database identifier for a transaction.
pub type TransactionId = DatabaseId;

/// A validated, non-empty transaction description.
///
/// Deserializing goes through [Description::new], so invalid values are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    /// Create a description.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDescription] if `text` is empty or only whitespace.
    pub fn new(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            Err(Error::EmptyDescription)
        } else {
            Ok(Self(text.to_string()))
        }
    }

    /// Create a description without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl TryFrom<String> for Description {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense (negative amount) or income (positive amount) recorded
/// against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID generated by the database.
    pub id: TransactionId,
    /// The project the transaction belongs to.
    pub project_id: ProjectId,
    /// What the money was for.
    pub description: Description,
    /// An optional grouping such as "Food" or "Travel".
    pub category: Option<String>,
    /// Negative for expenses, positive for income.
    pub amount: f64,
    /// Stored and returned exactly as the client sent it.
    pub date: String,
}

/// The JSON body for creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub project_id: ProjectId,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
    pub date: String,
}

/// The JSON body for replacing a transaction's fields.
///
/// The owning project cannot be changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdateForm {
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
    pub date: String,
}

/// The validated, mutable fields of a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub description: Description,
    pub category: Option<String>,
    pub amount: f64,
    pub date: String,
}

/// A validated transaction that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub project_id: ProjectId,
    pub details: TransactionDetails,
}

impl TryFrom<TransactionUpdateForm> for TransactionDetails {
    type Error = Error;

    fn try_from(form: TransactionUpdateForm) -> Result<Self, Self::Error> {
        Ok(Self {
            description: Description::new(&form.description)?,
            category: form.category,
            amount: form.amount,
            date: form.date,
        })
    }
}

impl TryFrom<TransactionForm> for NewTransaction {
    type Error = Error;

    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        let details = TransactionDetails::try_from(TransactionUpdateForm {
            description: form.description,
            category: form.category,
            amount: form.amount,
            date: form.date,
        })?;

        Ok(Self {
            project_id: form.project_id,
            details,
        })
    }
}

#[cfg(test)]
mod description_tests {
    use crate::{Error, transaction::Description};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(Description::new(""), Err(Error::EmptyDescription));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        assert_eq!(Description::new(" \t\n"), Err(Error::EmptyDescription));
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        assert!(Description::new("🍜").is_ok());
    }

    #[test]
    fn deserialize_validates_description() {
        assert!(serde_json::from_str::<Description>(r#""""#).is_err());
        assert!(serde_json::from_str::<Description>(r#""\n  ""#).is_err());

        let description: Description = serde_json::from_str(r#""  Lunch""#).unwrap();

        assert_eq!(description.as_ref(), "Lunch");
    }
}
