// SPDX-License-Identifier: GPL-3.0-only

//! Manual entry form
//!
//! Lets the operator type a record by hand when a card cannot be scanned.
//! Validation only checks shape; nothing is stored.

use crate::errors::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;

/// Form field order on the fields panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    LastName,
    FirstName,
    PhilhealthNo,
    Birthdate,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::LastName,
        FormField::FirstName,
        FormField::PhilhealthNo,
        FormField::Birthdate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::LastName => "LAST NAME",
            FormField::FirstName => "FIRST NAME",
            FormField::PhilhealthNo => "PHILHEALTH NO",
            FormField::Birthdate => "BIRTHDATE",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a script-friendly name such as `last_name` or `philhealth`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "last_name" | "last" => Some(FormField::LastName),
            "first_name" | "first" => Some(FormField::FirstName),
            "philhealth_no" | "philhealth" | "id" => Some(FormField::PhilhealthNo),
            "birthdate" | "dob" => Some(FormField::Birthdate),
            _ => None,
        }
    }

    /// Sample text shown in an empty entry
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::LastName => "DELA CRUZ",
            FormField::FirstName => "JUAN",
            FormField::PhilhealthNo => "12-345678901-2",
            FormField::Birthdate => "1985-05-20",
        }
    }
}

/// Values typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManualEntry {
    pub last_name: String,
    pub first_name: String,
    pub philhealth_no: String,
    pub birthdate: String,
}

impl ManualEntry {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::LastName => &self.last_name,
            FormField::FirstName => &self.first_name,
            FormField::PhilhealthNo => &self.philhealth_no,
            FormField::Birthdate => &self.birthdate,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::LastName => &mut self.last_name,
            FormField::FirstName => &mut self.first_name,
            FormField::PhilhealthNo => &mut self.philhealth_no,
            FormField::Birthdate => &mut self.birthdate,
        };
        *slot = value.into();
    }

    /// Check every field, reporting the first problem in form order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }

        let id = self.philhealth_no.trim();
        if !is_philhealth_number(id) {
            return Err(ValidationError::MalformedIdNumber(id.to_string()));
        }

        let birthdate = self.birthdate.trim();
        if NaiveDate::parse_from_str(birthdate, "%Y-%m-%d").is_err() {
            return Err(ValidationError::MalformedBirthdate(birthdate.to_string()));
        }

        Ok(())
    }
}

/// `NN-NNNNNNNNN-N`
fn is_philhealth_number(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    matches!(groups.as_slice(), [a, b, c]
        if a.len() == 2 && b.len() == 9 && c.len() == 1
            && groups.iter().all(|g| g.bytes().all(|byte| byte.is_ascii_digit())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ManualEntry {
        ManualEntry {
            last_name: "DELA CRUZ".into(),
            first_name: "JUAN".into(),
            philhealth_no: "12-345678901-2".into(),
            birthdate: "1985-05-20".into(),
        }
    }

    #[test]
    fn test_valid_entry() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_blank_field_reported_in_order() {
        let mut entry = valid();
        entry.set(FormField::Birthdate, "");
        entry.set(FormField::FirstName, "   ");
        assert_eq!(
            entry.validate(),
            Err(ValidationError::MissingField(FormField::FirstName))
        );
    }

    #[test]
    fn test_malformed_id_number() {
        for bad in ["12345678901", "1-345678901-2", "12-34567890A-2", "12-345678901-23"] {
            let mut entry = valid();
            entry.set(FormField::PhilhealthNo, bad);
            assert_eq!(
                entry.validate(),
                Err(ValidationError::MalformedIdNumber(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_malformed_birthdate() {
        for bad in ["20/05/1985", "1985-02-30", "yesterday"] {
            let mut entry = valid();
            entry.set(FormField::Birthdate, bad);
            assert!(matches!(
                entry.validate(),
                Err(ValidationError::MalformedBirthdate(_))
            ));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FormField::from_name("last-name"), Some(FormField::LastName));
        assert_eq!(FormField::from_name("DOB"), Some(FormField::Birthdate));
        assert_eq!(FormField::from_name("email"), None);
    }
}
