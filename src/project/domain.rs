//! Core project domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// Database identifier for a project.
pub type ProjectId = DatabaseId;

/// A validated, non-empty project name.
///
/// Deserializing goes through [ProjectName::new], so invalid values are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a project name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyProjectName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyProjectName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a project name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl TryFrom<String> for ProjectName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client engagement that transactions are recorded against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The ID generated by the database.
    pub id: ProjectId,
    /// The name shown to the user.
    pub name: ProjectName,
    /// Who the work is for.
    pub client: Option<String>,
    /// Free-form label such as "Active" or "Done", stored verbatim.
    pub status: Option<String>,
    /// The planned spend in dollars.
    pub budget: Option<f64>,
}

/// The JSON body for creating or replacing a project.
///
/// Every field must be present. All but `name` may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub client: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub status: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub budget: Option<f64>,
}

/// A validated project that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: ProjectName,
    pub client: Option<String>,
    pub status: Option<String>,
    pub budget: Option<f64>,
}

impl TryFrom<ProjectForm> for NewProject {
    type Error = Error;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ProjectName::new(&form.name)?,
            client: form.client,
            status: form.status,
            budget: form.budget,
        })
    }
}

#[cfg(test)]
mod project_name_tests {
    use crate::{Error, project::ProjectName};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(ProjectName::new(""), Err(Error::EmptyProjectName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        assert_eq!(ProjectName::new("\n\t \r"), Err(Error::EmptyProjectName));
    }

    #[test]
    fn new_trims_whitespace() {
        let name = ProjectName::new("  Website redesign ").unwrap();

        assert_eq!(name.as_ref(), "Website redesign");
    }

    #[test]
    fn deserialize_validates_name() {
        assert!(serde_json::from_str::<ProjectName>(r#""""#).is_err());
        assert!(serde_json::from_str::<ProjectName>(r#"" \t ""#).is_err());

        let name: ProjectName = serde_json::from_str(r#"" Website ""#).unwrap();

        assert_eq!(name.as_ref(), "Website");
    }
}

#[cfg(test)]
mod project_form_tests {
    use serde_json::json;

    use super::ProjectForm;

    #[test]
    fn accepts_null_optional_fields() {
        let form: ProjectForm = serde_json::from_value(json!({
            "name": "Foo",
            "client": null,
            "status": null,
            "budget": null,
        }))
        .unwrap();

        assert_eq!(form.client, None);
        assert_eq!(form.budget, None);
    }

    #[test]
    fn rejects_missing_fields() {
        let result = serde_json::from_value::<ProjectForm>(json!({ "name": "Foo" }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_types() {
        let result = serde_json::from_value::<ProjectForm>(json!({
            "name": "Foo",
            "client": "Acme",
            "status": "Active",
            "budget": "lots",
        }));

        assert!(result.is_err());
    }
}
