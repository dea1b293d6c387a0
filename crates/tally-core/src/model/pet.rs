use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::resource::{check_body_name, Resource};

/// Longest accepted category.
pub const MAX_CATEGORY_LEN: usize = 63;

/// Valid pet genders. Serialized in upper case (`"MALE"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

/// A pet in the store inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub category: String,
    pub available: bool,
    pub gender: Gender,
    pub birthday: NaiveDate,
}

/// Every mutable field of a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetFields {
    pub category: String,
    pub available: bool,
    pub gender: Gender,
    pub birthday: NaiveDate,
}

impl Pet {
    pub fn new(name: impl Into<String>, fields: PetFields) -> Self {
        Self {
            name: name.into(),
            category: fields.category,
            available: fields.available,
            gender: fields.gender,
            birthday: fields.birthday,
        }
    }
}

/// Mutations accepted by a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetChange {
    /// Overwrite all fields except the name.
    Replace(PetFields),
    /// Buy the pet. Only an available pet can be purchased.
    Purchase,
}

impl Resource for Pet {
    type Change = PetChange;
    const KIND: &'static str = "pet";

    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, change: PetChange) -> Result<()> {
        match change {
            PetChange::Replace(f) => {
                self.category = f.category;
                self.available = f.available;
                self.gender = f.gender;
                self.birthday = f.birthday;
            }
            PetChange::Purchase => {
                if !self.available {
                    return Err(TallyError::Conflict(format!(
                        "pet '{}' is not available",
                        self.name
                    )));
                }
                self.available = false;
            }
        }
        Ok(())
    }
}

/// Body accepted by `POST`/`PUT /pets/{name}`.
///
/// `category` and `available` are required; `available` must be a JSON
/// boolean. `gender` defaults to `UNKNOWN` and `birthday` to today (UTC).
/// Unknown fields are rejected, as for counters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub category: String,
    pub available: bool,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl PetRequest {
    /// Validate against the path name and produce the mutable fields.
    pub fn into_fields(self, name: &str) -> Result<PetFields> {
        check_body_name(name, self.name.as_deref())?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(TallyError::BadRequest("pet category must not be empty".into()));
        }
        if category.chars().count() > MAX_CATEGORY_LEN {
            return Err(TallyError::BadRequest(format!(
                "pet category must be at most {MAX_CATEGORY_LEN} characters"
            )));
        }

        Ok(PetFields {
            category: category.to_string(),
            available: self.available,
            gender: self.gender,
            birthday: self.birthday.unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fido() -> Pet {
        Pet::new(
            "fido",
            PetFields {
                category: "dog".into(),
                available: true,
                gender: Gender::Male,
                birthday: NaiveDate::from_ymd_opt(2019, 5, 1).unwrap(),
            },
        )
    }

    #[test]
    fn purchase_only_once() {
        let mut p = fido();
        p.apply(PetChange::Purchase).unwrap();
        assert!(!p.available);

        let err = p.apply(PetChange::Purchase).unwrap_err();
        assert_eq!(err.http_status(), 409);
        assert!(!p.available);
    }

    #[test]
    fn serializes_with_upper_case_gender_and_iso_birthday() {
        let v = serde_json::to_value(fido()).unwrap();
        assert_eq!(v["gender"], "MALE");
        assert_eq!(v["birthday"], "2019-05-01");
        assert_eq!(v["available"], true);
    }

    #[test]
    fn blank_category_rejected() {
        let req: PetRequest =
            serde_json::from_str(r#"{"category": "   ", "available": true}"#).unwrap();
        assert!(req.into_fields("fido").is_err());
    }
}
