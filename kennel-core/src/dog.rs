use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a dog.
pub type DogId = i64;

/// A stored dog record.
///
/// `id` is assigned by the gateway on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i64,
}

/// Fully-populated create payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i64,
}

impl NewDog {
    /// Attach a gateway-assigned id.
    pub fn into_dog(self, id: DogId) -> Dog {
        Dog {
            id,
            name: self.name,
            breed: self.breed,
            description: self.description,
            age: self.age,
        }
    }
}

/// Partial update payload. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DogPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl DogPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.description.is_none() && self.age.is_none()
    }

    /// Overwrite the present fields of `dog`; `id` is never touched.
    pub fn apply_to(self, dog: &mut Dog) {
        if let Some(name) = self.name {
            dog.name = name;
        }
        if let Some(breed) = self.breed {
            dog.breed = breed;
        }
        if let Some(description) = self.description {
            dog.description = description;
        }
        if let Some(age) = self.age {
            dog.age = age;
        }
    }
}
