use serde::Deserialize;
use validator::Validate;

use crate::dto::submission_dto::YesNo;

/// Raw inscription form body. Everything optional at the wire level so missing
/// or mistyped fields surface as per-field errors instead of deserialization
/// failures; `age` accepts a JSON number or a numeric string, like the form posts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionForm {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub is_high_school_graduate: Option<String>,
}

/// Validated inscription: all four fields are unconditionally required.
#[derive(Debug, Clone, Validate)]
pub struct InscriptionPayload {
    #[validate(length(min = 3, message = "Nombre completo es requerido"))]
    pub full_name: String,
    #[validate(range(min = 18, max = 99, message = "Debe ser mayor de edad"))]
    pub age: i64,
    #[validate(length(min = 5, message = "Número de cédula es requerido"))]
    pub national_id: String,
    pub is_high_school_graduate: YesNo,
}
