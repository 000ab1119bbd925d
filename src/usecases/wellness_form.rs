//! Input state store. Owns the form fields, the hobby selection and the result slot.
//!
//! One instance per mounted form; mutated only by the UI flow.

use crate::domain::{
    DomainError, FieldValue, NumericField, ResultState, StoredResult, WellnessInputs,
};

/// Mutable form state.
#[derive(Debug, Clone, Default)]
pub struct WellnessForm {
    inputs: WellnessInputs,
    result: ResultState,
}

impl WellnessForm {
    /// New form with mount-time defaults and no result.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Numeric fields
    // ─────────────────────────────────────────────────────────────────────────

    pub fn age(&self) -> i64 {
        self.inputs.age
    }

    pub fn set_age(&mut self, age: i64) {
        self.inputs.age = age;
    }

    pub fn sleep(&self) -> f64 {
        self.inputs.sleep
    }

    pub fn set_sleep(&mut self, hours: f64) {
        self.inputs.sleep = hours;
    }

    pub fn screen_time(&self) -> f64 {
        self.inputs.screen_time
    }

    pub fn set_screen_time(&mut self, hours: f64) {
        self.inputs.screen_time = hours;
    }

    pub fn social_interaction(&self) -> i64 {
        self.inputs.social_interaction
    }

    pub fn set_social_interaction(&mut self, per_day: i64) {
        self.inputs.social_interaction = per_day;
    }

    pub fn exercise(&self) -> i64 {
        self.inputs.exercise
    }

    pub fn set_exercise(&mut self, days_per_week: i64) {
        self.inputs.exercise = days_per_week;
    }

    pub fn get_field(&self, field: NumericField) -> FieldValue {
        match field {
            NumericField::Age => FieldValue::Int(self.inputs.age),
            NumericField::Sleep => FieldValue::Float(self.inputs.sleep),
            NumericField::ScreenTime => FieldValue::Float(self.inputs.screen_time),
            NumericField::SocialInteraction => FieldValue::Int(self.inputs.social_interaction),
            NumericField::Exercise => FieldValue::Int(self.inputs.exercise),
        }
    }

    /// Replace a field's value. No range clamping: negative or huge values are kept.
    ///
    /// Integer fields accept `Float` only when it is integral and fits in an `i64`;
    /// otherwise the field is left unchanged and `DomainError::FieldType` is returned.
    pub fn set_field(
        &mut self,
        field: NumericField,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        let value = value.into();
        if field.is_integer() {
            let whole = match value {
                FieldValue::Int(v) => v,
                FieldValue::Float(v)
                    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
                {
                    v as i64
                }
                FieldValue::Float(_) => return Err(DomainError::FieldType { field, value }),
            };
            match field {
                NumericField::Age => self.set_age(whole),
                NumericField::SocialInteraction => self.set_social_interaction(whole),
                _ => self.set_exercise(whole),
            }
        } else {
            let real = value.as_f64();
            match field {
                NumericField::Sleep => self.set_sleep(real),
                _ => self.set_screen_time(real),
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hobbies
    // ─────────────────────────────────────────────────────────────────────────

    /// Remove `name` if selected, otherwise append it. Returns whether it is now selected.
    pub fn toggle_hobby(&mut self, name: &str) -> bool {
        let hobbies = &mut self.inputs.hobbies;
        if let Some(pos) = hobbies.iter().position(|h| h == name) {
            hobbies.remove(pos);
            false
        } else {
            hobbies.push(name.to_string());
            true
        }
    }

    /// Make the selection equal to the labels in `chosen` by toggling the differences.
    /// Kept hobbies stay in place; new ones are appended in `chosen` order. Repeated
    /// labels count once.
    pub fn apply_selection<'a>(&mut self, chosen: impl IntoIterator<Item = &'a str>) {
        let mut wanted: Vec<&str> = Vec::new();
        for label in chosen {
            if !wanted.contains(&label) {
                wanted.push(label);
            }
        }
        let dropped: Vec<String> = self
            .inputs
            .hobbies
            .iter()
            .filter(|h| !wanted.iter().any(|w| *w == h.as_str()))
            .cloned()
            .collect();
        for hobby in &dropped {
            self.toggle_hobby(hobby);
        }
        for label in wanted {
            if !self.is_selected(label) {
                self.toggle_hobby(label);
            }
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.inputs.hobbies.iter().any(|h| h == name)
    }

    /// Selected hobbies in insertion order.
    pub fn hobbies(&self) -> &[String] {
        &self.inputs.hobbies
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshot & result
    // ─────────────────────────────────────────────────────────────────────────

    /// Read-only copy of the current inputs, as sent to the analysis endpoint.
    pub fn snapshot(&self) -> WellnessInputs {
        self.inputs.clone()
    }

    pub fn result_state(&self) -> &ResultState {
        &self.result
    }

    /// Replace the stored result wholesale.
    pub fn store_result(&mut self, stored: StoredResult) {
        self.result = ResultState::Present(stored);
    }

    /// Back to mount-time defaults, result cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
