//! Breed catalog model and API representations.
//!
//! `life_span` and `weight` come from the upstream catalog as loosely
//! formatted prose ("10 - 15 years", "4 - 6 kg", "8 to 12 years"). They are
//! stored verbatim; range filtering over them is handled by the predicate
//! parser in `domain::breed_filter`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    models::{ApiError, Species},
    utils::generate_uuid,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<String>,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Breed {
    /// Applies a partial update. Absent fields are left unchanged.
    pub fn apply_update(&mut self, request: BreedUpdateRequest) -> Result<(), ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        if let Some(name) = request.name {
            self.name = name;
        }
        if let Some(description) = request.description {
            self.description = Some(description);
        }
        if let Some(origin) = request.origin {
            self.origin = Some(origin);
        }
        if let Some(life_span) = request.life_span {
            self.life_span = Some(life_span);
        }
        if let Some(weight) = request.weight {
            self.weight = Some(weight);
        }
        if let Some(image_url) = request.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(is_active) = request.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BreedCreateRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub species: Species,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BreedUpdateRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<BreedCreateRequest> for Breed {
    type Error = ApiError;

    fn try_from(request: BreedCreateRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let now = Utc::now();
        Ok(Self {
            id: generate_uuid(),
            name: request.name,
            species: request.species,
            description: request.description,
            origin: request.origin,
            life_span: request.life_span,
            weight: request.weight,
            is_active: request.is_active,
            image_url: request.image_url,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreedResponse {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<String>,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Breed> for BreedResponse {
    fn from(breed: Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name,
            species: breed.species,
            description: breed.description,
            origin: breed.origin,
            life_span: breed.life_span,
            weight: breed.weight,
            is_active: breed.is_active,
            image_url: breed.image_url,
            created_at: breed.created_at,
            updated_at: breed.updated_at,
        }
    }
}

/// Query parameters accepted by `GET /breeds`.
///
/// Numeric bounds arrive as raw strings: a non-numeric value means "skip this
/// filter", never a request error. The lenient parse happens when converting
/// into `domain::BreedFilter`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BreedFilterQuery {
    pub species: Option<Species>,
    pub search: Option<String>,
    pub origin: Option<String>,
    pub min_life_span: Option<String>,
    pub max_life_span: Option<String>,
    pub weight: Option<String>,
}
