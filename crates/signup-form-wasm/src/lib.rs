//! Signup-Form WASM
//!
//! WebAssembly bindings for the signup form validation engine.
//! The browser runs exactly the rules the server runs.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use signup_form::{
    toggle_member, validate as validate_record, validate_field as validate_record_field,
    CatalogSchema, ErrorMap, Field, InputRecord, RuleCatalog,
};
use signup_form_validation as validators;
use wasm_bindgen::prelude::*;

static SIGNUP_CATALOG: Lazy<RuleCatalog> = Lazy::new(RuleCatalog::signup);

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_record(record: JsValue) -> Result<InputRecord, JsValue> {
    serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

/// Plain JS objects rather than `Map`s
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Validate the whole form against the built-in signup rules
///
/// # Returns
/// An object mapping field name to message; empty when the form is valid
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validate({ firstName: 'Ada', interests: ['coding'] });
/// if (Object.keys(errors).length === 0) submit();
/// ```
#[wasm_bindgen(js_name = validate)]
pub fn validate(record: JsValue) -> Result<JsValue, JsValue> {
    let record = parse_record(record)?;
    to_js::<ErrorMap>(&validate_record(&record, &SIGNUP_CATALOG))
}

/// Validate the whole form against a catalog described as a JSON schema
#[wasm_bindgen(js_name = validateWithSchema)]
pub fn validate_with_schema(record: JsValue, schema_json: &str) -> Result<JsValue, JsValue> {
    let record = parse_record(record)?;
    let catalog = CatalogSchema::from_json(schema_json)
        .and_then(CatalogSchema::into_catalog)
        .map_err(|e| JsValue::from_str(&format!("Invalid schema: {}", e)))?;
    to_js::<ErrorMap>(&validate_record(&record, &catalog))
}

/// First violated message for one field, or `undefined`
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(record: JsValue, field_name: &str) -> Result<Option<String>, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e: signup_form::UnknownField| JsValue::from_str(&e.to_string()))?;
    let record = parse_record(record)?;
    Ok(validate_record_field(&record, &SIGNUP_CATALOG, field))
}

/// Whether the form may be submitted
#[wasm_bindgen(js_name = isValid)]
pub fn is_valid(record: JsValue) -> Result<bool, JsValue> {
    let record = parse_record(record)?;
    Ok(validate_record(&record, &SIGNUP_CATALOG).is_valid())
}

/// Checkbox handler: returns the new collection, which must replace the old one
#[wasm_bindgen(js_name = toggleMember)]
pub fn toggle_member_js(collection: JsValue, member: &str, included: bool) -> Result<JsValue, JsValue> {
    let collection: Vec<String> = serde_wasm_bindgen::from_value(collection)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse collection: {}", e)))?;
    to_js(&toggle_member(&collection, member, included))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validators::is_valid_email(email)
}

/// Quick phone number validation
#[wasm_bindgen(js_name = isValidPhoneNumber)]
pub fn is_valid_phone_number_js(phone: &str, digits: usize) -> bool {
    validators::validate_phone_number(phone, digits).is_ok()
}

/// Quick password validation: the first unmet requirement, if any
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str, min_length: usize) -> Option<String> {
    validators::validate_password(password, min_length).err()
}
