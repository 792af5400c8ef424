use std::collections::BTreeMap;

use axum::Json;
use serde::Deserialize;

use crate::models::FieldSpec;
use crate::services::validation::{self, Validation};

#[derive(Deserialize)]
pub struct ValidateRequest {
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

pub async fn validate(Json(request): Json<ValidateRequest>) -> Json<Validation> {
    Json(validation::validate(&request.fields, &request.values))
}
