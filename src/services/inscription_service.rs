use std::collections::HashMap;

use crate::dto::inscription_dto::{InscriptionForm, InscriptionPayload};
use crate::dto::submission_dto::{SubmissionResult, YesNo};
use crate::error::Result;
use crate::services::whatsapp_service;
use crate::utils::validation::check;

const FIX_ERRORS_MESSAGE: &str = "Por favor corrija los errores en el formulario.";
const SUCCESS_MESSAGE: &str = "¡Genial! Hemos recibido tus datos. Te redirigiremos a WhatsApp para finalizar tu inscripción y resolver cualquier duda. ¡Tu futuro te espera!";

#[derive(Clone)]
pub struct InscriptionService {
    whatsapp_phone: String,
}

impl InscriptionService {
    pub fn new(whatsapp_phone: String) -> Self {
        Self { whatsapp_phone }
    }

    /// Validates the inscription and, on success, returns the WhatsApp redirect
    /// carrying all four field values verbatim. Submissions are logged, never stored.
    pub fn submit(&self, form: InscriptionForm) -> Result<SubmissionResult> {
        // Coercion failures take the field's slot in the error map; the
        // validator pass then covers the remaining rules, first message wins.
        let mut coercion_errors: HashMap<String, String> = HashMap::new();

        let age = match form.age.as_ref().and_then(coerce_integer) {
            Some(age) => age,
            None => {
                coercion_errors.insert("age".to_string(), "Edad no válida".to_string());
                0
            }
        };
        let graduate = match form
            .is_high_school_graduate
            .as_deref()
            .and_then(YesNo::parse)
        {
            Some(choice) => choice,
            None => {
                coercion_errors.insert(
                    "isHighSchoolGraduate".to_string(),
                    "Seleccione una opción".to_string(),
                );
                YesNo::No
            }
        };

        let payload = InscriptionPayload {
            full_name: form.full_name.unwrap_or_default(),
            age,
            national_id: form.national_id.unwrap_or_default(),
            is_high_school_graduate: graduate,
        };

        let mut field_errors = check(&payload);
        field_errors.extend(coercion_errors);

        if !field_errors.is_empty() {
            return Ok(SubmissionResult::rejected(FIX_ERRORS_MESSAGE, field_errors));
        }

        tracing::info!(
            full_name = %payload.full_name,
            age = payload.age,
            national_id = %payload.national_id,
            high_school_graduate = %payload.is_high_school_graduate,
            "inscription accepted"
        );

        let text = format!(
            "¡Hola WASP! Quiero inscribirme al curso de operador de montacargas.\n\nMis datos son:\nNombre: {}\nEdad: {}\nCédula: {}\n¿Es bachiller?: {}",
            payload.full_name, payload.age, payload.national_id, payload.is_high_school_graduate
        );
        let link = whatsapp_service::deep_link(&self.whatsapp_phone, &text)?;

        Ok(SubmissionResult::redirect(SUCCESS_MESSAGE, link))
    }
}

/// The form posts age either as a JSON number or a numeric string.
fn coerce_integer(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> InscriptionService {
        InscriptionService::new("573008336000".to_string())
    }

    fn valid_form() -> InscriptionForm {
        InscriptionForm {
            full_name: Some("Ana Ruiz".into()),
            age: Some(serde_json::json!(22)),
            national_id: Some("123456".into()),
            is_high_school_graduate: Some("Sí".into()),
        }
    }

    #[test]
    fn valid_inscription_builds_redirect_with_fields_in_order() {
        let result = service().submit(valid_form()).unwrap();
        assert!(result.success);
        let link = result.redirect_target.expect("redirect link");
        let url = url::Url::parse(&link).unwrap();
        let (_, text) = url.query_pairs().next().unwrap();
        let positions: Vec<usize> = ["Ana Ruiz", "22", "123456", "Sí"]
            .iter()
            .map(|needle| text.find(needle).expect("field present in template"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "fields out of order");
    }

    #[test]
    fn age_bounds() {
        for (age, ok) in [(17, false), (18, true), (99, true), (100, false)] {
            let mut form = valid_form();
            form.age = Some(serde_json::json!(age));
            let result = service().submit(form).unwrap();
            assert_eq!(result.success, ok, "age {}", age);
            if !ok {
                let errors = result.field_errors.unwrap();
                assert_eq!(errors.len(), 1);
                assert!(errors.contains_key("age"));
            }
        }
    }

    #[test]
    fn age_accepts_numeric_string() {
        let mut form = valid_form();
        form.age = Some(serde_json::json!("22"));
        assert!(service().submit(form).unwrap().success);
    }

    #[test]
    fn missing_fields_fail_per_field() {
        let result = service().submit(InscriptionForm::default()).unwrap();
        assert!(!result.success);
        let errors = result.field_errors.unwrap();
        for key in ["fullName", "age", "nationalId", "isHighSchoolGraduate"] {
            assert!(errors.contains_key(key), "missing error for {}", key);
        }
    }

    #[test]
    fn invalid_graduate_choice_gets_its_own_message() {
        let mut form = valid_form();
        form.is_high_school_graduate = Some("tal vez".into());
        let errors = service().submit(form).unwrap().field_errors.unwrap();
        assert_eq!(
            errors.get("isHighSchoolGraduate").map(String::as_str),
            Some("Seleccione una opción")
        );
    }
}
