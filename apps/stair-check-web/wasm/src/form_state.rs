//! Page-wide form state
//!
//! Holds the unit and language toggles and the last outcome between calls.
//! The state exists only between `init` and `teardown`.

use std::cell::RefCell;

use compliance_engine::{CheckOutcome, UnitSystem};
use shared_types::Locale;

pub const NOT_INITIALIZED: &str = "Stair check not initialized; call init_stair_check first";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub units: UnitSystem,
    pub locale: Locale,
    pub last_outcome: Option<CheckOutcome>,
}

thread_local! {
    static FORM_STATE: RefCell<Option<FormState>> = const { RefCell::new(None) };
}

/// Start from a fresh state, dropping anything left from a previous session
pub fn init() {
    FORM_STATE.with(|state| *state.borrow_mut() = Some(FormState::default()));
}

pub fn teardown() {
    FORM_STATE.with(|state| state.borrow_mut().take());
}

pub fn is_initialized() -> bool {
    FORM_STATE.with(|state| state.borrow().is_some())
}

/// Run `f` against the live state
pub fn with_state<R>(f: impl FnOnce(&mut FormState) -> R) -> Result<R, String> {
    FORM_STATE.with(|state| match state.borrow_mut().as_mut() {
        Some(form) => Ok(f(form)),
        None => Err(NOT_INITIALIZED.to_string()),
    })
}
