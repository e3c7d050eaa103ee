use compliance_engine::{
    CheckOutcome, ComplianceEngine, RawDimensions, StairSelectors, StairSubmission, UnitSystem,
};
use serde::Deserialize;
use shared_types::Locale;
use wasm_bindgen::prelude::*;

pub mod form_state;
pub mod result_panel;

pub use form_state::FormState;
pub use result_panel::{IssueItem, ResultPanel};

/// Submission as the page sends it; missing toggles come from the form state
#[derive(Debug, Clone, Deserialize)]
pub struct FormSubmission {
    pub selectors: StairSelectors,
    #[serde(default)]
    pub units: Option<UnitSystem>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub dimensions: RawDimensions,
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Set up the form state; call once when the page loads
#[wasm_bindgen]
pub fn init_stair_check() {
    console_error_panic_hook::set_once();
    form_state::init();
    log("Stair check initialized");
}

/// Drop the form state; later checks fail until the next init
#[wasm_bindgen]
pub fn teardown_stair_check() {
    form_state::teardown();
    log("Stair check torn down");
}

/// Feet/inches text to whole millimeters, `undefined` when unparseable
#[wasm_bindgen]
pub fn parse_imperial_length_wasm(raw: &str) -> Option<u32> {
    dimension_parser::parse_imperial_length(raw).ok()
}

#[wasm_bindgen]
pub fn set_unit_system_wasm(code: &str) -> Result<(), JsValue> {
    set_unit_system(code).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn set_locale_wasm(code: &str) -> Result<(), JsValue> {
    set_locale(code).map_err(|e| JsValue::from_str(&e))
}

/// Validate and evaluate a JSON submission, returning the JSON outcome
#[wasm_bindgen]
pub fn check_submission_wasm(submission_json: &str) -> Result<String, JsValue> {
    check_submission_json(submission_json).map_err(|e| JsValue::from_str(&e))
}

/// Outcome of the last check as JSON
#[wasm_bindgen]
pub fn last_outcome_json_wasm() -> Option<String> {
    form_state::with_state(|state| state.last_outcome.clone())
        .ok()
        .flatten()
        .and_then(|outcome| serde_json::to_string(&outcome).ok())
}

/// Panel for the last check
#[wasm_bindgen]
pub fn last_result_panel() -> Option<ResultPanel> {
    form_state::with_state(|state| state.last_outcome.clone())
        .ok()
        .flatten()
        .map(ResultPanel::from_outcome)
}

pub fn set_unit_system(code: &str) -> Result<(), String> {
    let units =
        UnitSystem::parse_code(code).ok_or_else(|| format!("Unknown unit system: {}", code))?;
    form_state::with_state(|state| state.units = units)
}

pub fn set_locale(code: &str) -> Result<(), String> {
    let locale = Locale::parse_code(code).map_err(|e| e.to_string())?;
    form_state::with_state(|state| state.locale = locale)
}

pub fn check_submission_json(submission_json: &str) -> Result<String, String> {
    let form: FormSubmission = serde_json::from_str(submission_json)
        .map_err(|e| format!("Failed to parse submission: {}", e))?;

    let outcome = form_state::with_state(|state| {
        let submission = StairSubmission {
            selectors: form.selectors,
            units: form.units.unwrap_or(state.units),
            locale: form.locale.unwrap_or(state.locale),
            dimensions: form.dimensions,
        };
        let outcome: CheckOutcome =
            ComplianceEngine::with_locale(submission.locale).check_submission(&submission);
        state.last_outcome = Some(outcome.clone());
        outcome
    })?;

    serde_json::to_string(&outcome).map_err(|e| format!("Failed to serialize outcome: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SELECTORS: &str = r#""selectors": {
        "building_part": "part9",
        "building_use": "residential",
        "stair_type": "private",
        "stair_use": "interior",
        "stair_config": "straight"
    }"#;

    fn submission_json(extra: &str, dimensions: &str) -> String {
        format!("{{{}, {} \"dimensions\": {}}}", SELECTORS, extra, dimensions)
    }

    #[test]
    fn test_parse_wasm() {
        assert_eq!(parse_imperial_length_wasm("6'-9 1/4"), Some(2064));
        assert_eq!(parse_imperial_length_wasm("tall"), None);
        assert_eq!(parse_imperial_length_wasm(""), None);
    }

    #[test]
    fn test_check_requires_init() {
        teardown_stair_check();
        let json = submission_json("", r#"{"riser": "180"}"#);
        assert_eq!(
            check_submission_json(&json),
            Err(form_state::NOT_INITIALIZED.to_string())
        );
        assert_eq!(set_locale("fr"), Err(form_state::NOT_INITIALIZED.to_string()));
    }

    #[test]
    fn test_metric_check_records_last_outcome() {
        init_stair_check();
        let json = submission_json(
            "",
            r#"{"riser": "180", "tread": "280", "width": "900", "headroom": "2000"}"#,
        );
        let out = check_submission_json(&json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "evaluated");
        assert_eq!(value["compliant"], true);

        let panel = last_result_panel().unwrap();
        assert!(panel.is_compliant());
        assert_eq!(last_outcome_json_wasm(), Some(out));
        teardown_stair_check();
    }

    #[test]
    fn test_form_toggles_fill_missing_fields() {
        init_stair_check();
        set_unit_system("imperial").unwrap();
        set_locale("fr").unwrap();

        // 8 1/2" = 216 mm, above the 200 mm private maximum
        let json = submission_json(
            "",
            r#"{"riser": "8 1/2", "tread": "10 1/4", "width": "34", "headroom": "6'5 1/2"}"#,
        );
        let value: serde_json::Value =
            serde_json::from_str(&check_submission_json(&json).unwrap()).unwrap();
        assert_eq!(value["compliant"], false);
        assert_eq!(
            value["issues"][0]["message"],
            "Hauteur de contremarche : 216 mm dépasse le maximum de 200 mm"
        );

        // An explicit unit system in the JSON wins
        let json = submission_json(
            r#""units": "metric","#,
            r#"{"riser": "8 1/2", "tread": "260", "width": "864", "headroom": "1969"}"#,
        );
        let value: serde_json::Value =
            serde_json::from_str(&check_submission_json(&json).unwrap()).unwrap();
        assert_eq!(value["status"], "invalid");
        teardown_stair_check();
    }

    #[test]
    fn test_bad_json_and_codes() {
        init_stair_check();
        assert!(check_submission_json("{not json")
            .unwrap_err()
            .starts_with("Failed to parse submission"));
        assert!(set_unit_system("cubits").is_err());
        assert!(set_locale("de").is_err());
        teardown_stair_check();
    }
}
