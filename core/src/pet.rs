// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::ValidationError;

/// A pet profile.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Pet {
    /// Store assigned id, `0` until inserted.
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub age: i64,
    pub weight: f64,
    pub sex: String,
    pub color: String,
    pub microchip_id: String,
    pub allergies: String,
    pub medications: String,
    pub vet_name: String,
    pub vet_phone: String,
    pub notes: String,
    pub image_uri: String,
}

impl Pet {
    /// Creates a pet with the two required fields, everything else left empty.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            ..Default::default()
        }
    }

    /// Checks the fields required for saving a pet.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.breed.trim().is_empty() {
            return Err(ValidationError::MissingField("breed"));
        }
        Ok(())
    }
}

/// Partial update of a pet profile, as filled by the edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub sex: Option<String>,
    pub color: Option<String>,
    pub microchip_id: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub vet_name: Option<String>,
    pub vet_phone: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
}

impl PetPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &PetPatch::default()
    }

    /// Applies the patch to the given pet.
    pub fn apply_to(self, pet: &mut Pet) {
        macro_rules! apply {
            ($($field:ident),*) => {
                $(if let Some(value) = self.$field {
                    pet.$field = value;
                })*
            };
        }

        apply!(
            name,
            breed,
            age,
            weight,
            sex,
            color,
            microchip_id,
            allergies,
            medications,
            vet_name,
            vet_phone,
            notes,
            image_uri
        );
    }
}
