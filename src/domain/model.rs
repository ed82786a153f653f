//! JSON request bodies accepted by the default API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DogBreed {
    Dingo,
    Husky,
    Retriever,
    Shepherd,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bark: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<DogBreed>,
}

/// Body of `PATCH /pets`: one of `Cat` or `Dog`, discriminated by `pet_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pet_type")]
pub enum PetsPatchRequest {
    Cat(Cat),
    Dog(Dog),
}

impl From<Cat> for PetsPatchRequest {
    fn from(cat: Cat) -> Self {
        PetsPatchRequest::Cat(cat)
    }
}

impl From<Dog> for PetsPatchRequest {
    fn from(dog: Dog) -> Self {
        PetsPatchRequest::Dog(dog)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetByAge {
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetByTypePetType {
    Cat,
    Dog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetByType {
    pub pet_type: PetByTypePetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunts: Option<bool>,
}

/// Body of `PATCH /pets-filtered`: any of `PetByAge` or `PetByType`.
///
/// Deserialization tries `PetByAge` first, so a document carrying both `age`
/// and `pet_type` lands in that variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PetsFilteredPatchRequest {
    PetByAge(PetByAge),
    PetByType(PetByType),
}

impl From<PetByAge> for PetsFilteredPatchRequest {
    fn from(value: PetByAge) -> Self {
        PetsFilteredPatchRequest::PetByAge(value)
    }
}

impl From<PetByType> for PetsFilteredPatchRequest {
    fn from(value: PetByType) -> Self {
        PetsFilteredPatchRequest::PetByType(value)
    }
}
