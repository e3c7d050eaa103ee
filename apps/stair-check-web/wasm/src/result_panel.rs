use compliance_engine::{CheckOutcome, FieldError};
use serde::{Deserialize, Serialize};
use shared_types::{Measurement, Violation};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueItem {
    pub id: String,
    pub violation: Violation,
    pub is_highlighted: bool,
}

#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ResultPanel {
    outcome: Option<CheckOutcome>,
    issues: Vec<IssueItem>,
    selected_id: Option<String>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_outcome(outcome: CheckOutcome) -> Self {
        let mut panel = Self::new();
        panel.set_outcome(outcome);
        panel
    }

    pub fn set_outcome(&mut self, outcome: CheckOutcome) {
        self.issues = outcome
            .verdict()
            .map(|verdict| {
                verdict
                    .issues
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(idx, violation)| IssueItem {
                        id: format!("issue-{}", idx),
                        violation,
                        is_highlighted: false,
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.selected_id = None;
        self.outcome = Some(outcome);
    }

    pub fn outcome(&self) -> Option<&CheckOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_compliant(&self) -> bool {
        self.outcome.as_ref().is_some_and(CheckOutcome::is_compliant)
    }

    pub fn code_reference(&self) -> Option<&str> {
        self.outcome
            .as_ref()
            .and_then(CheckOutcome::verdict)
            .map(|verdict| verdict.code_reference.as_str())
    }

    pub fn issues(&self) -> Vec<&Violation> {
        self.issues.iter().map(|item| &item.violation).collect()
    }

    pub fn issues_for(&self, measurement: Measurement) -> Vec<&Violation> {
        self.issues
            .iter()
            .filter(|item| item.violation.measurement == measurement)
            .map(|item| &item.violation)
            .collect()
    }

    pub fn field_errors(&self) -> &[FieldError] {
        self.outcome
            .as_ref()
            .map(CheckOutcome::field_errors)
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.issues).unwrap_or_default()
    }

    pub fn select_issue(&mut self, id: &str) {
        for item in &mut self.issues {
            item.is_highlighted = false;
        }

        if let Some(item) = self.issues.iter_mut().find(|item| item.id == id) {
            item.is_highlighted = true;
            self.selected_id = Some(id.to_string());
        } else {
            self.selected_id = None;
        }
    }

    pub fn get_selected(&self) -> Option<&IssueItem> {
        self.selected_id
            .as_ref()
            .and_then(|id| self.issues.iter().find(|item| &item.id == id))
    }
}

// WASM bindings
#[wasm_bindgen]
impl ResultPanel {
    #[wasm_bindgen(constructor)]
    pub fn new_wasm() -> Self {
        Self::new()
    }

    #[wasm_bindgen(js_name = isCompliant)]
    pub fn is_compliant_wasm(&self) -> bool {
        self.is_compliant()
    }

    #[wasm_bindgen(js_name = isEvaluated)]
    pub fn is_evaluated(&self) -> bool {
        self.outcome.as_ref().and_then(CheckOutcome::verdict).is_some()
    }

    #[wasm_bindgen(js_name = getCodeReference)]
    pub fn get_code_reference(&self) -> Option<String> {
        self.code_reference().map(str::to_string)
    }

    #[wasm_bindgen(js_name = getIssuesJson)]
    pub fn get_issues_json(&self) -> String {
        self.to_json()
    }

    #[wasm_bindgen(js_name = getIssueCount)]
    pub fn get_issue_count(&self) -> u32 {
        self.issues.len() as u32
    }

    #[wasm_bindgen(js_name = getFieldErrorsJson)]
    pub fn get_field_errors_json(&self) -> String {
        serde_json::to_string(self.field_errors()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = getFieldErrorCount)]
    pub fn get_field_error_count(&self) -> u32 {
        self.field_errors().len() as u32
    }

    #[wasm_bindgen(js_name = selectIssue)]
    pub fn select_issue_wasm(&mut self, id: &str) {
        self.select_issue(id);
    }

    #[wasm_bindgen(js_name = getSelectedJson)]
    pub fn get_selected_json(&self) -> Option<String> {
        self.get_selected()
            .and_then(|item| serde_json::to_string(item).ok())
    }

    #[wasm_bindgen(js_name = clear)]
    pub fn clear(&mut self) {
        self.outcome = None;
        self.issues.clear();
        self.selected_id = None;
    }
}
