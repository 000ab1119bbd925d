//! Domain entities. Pure data structures for the core business.
//!
//! Wire names follow the analysis endpoint (camelCase); Rust names stay snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five numeric inputs of the wellness form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Sleep,
    ScreenTime,
    SocialInteraction,
    Exercise,
}

impl NumericField {
    /// All fields in form order.
    pub const ALL: [NumericField; 5] = [
        NumericField::Age,
        NumericField::Sleep,
        NumericField::ScreenTime,
        NumericField::SocialInteraction,
        NumericField::Exercise,
    ];

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::Sleep => "Sleep (hrs/day)",
            NumericField::ScreenTime => "Screen Time (hrs/day)",
            NumericField::SocialInteraction => "Social Interactions (per day)",
            NumericField::Exercise => "Exercise (days/week)",
        }
    }

    /// Field name in the request payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            NumericField::Age => "age",
            NumericField::Sleep => "sleep",
            NumericField::ScreenTime => "screenTime",
            NumericField::SocialInteraction => "socialInteraction",
            NumericField::Exercise => "exercise",
        }
    }

    /// True for fields holding whole numbers (age, social interactions, exercise days).
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            NumericField::Age | NumericField::SocialInteraction | NumericField::Exercise
        )
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for one numeric field. Integer fields hold `Int`, real-valued fields `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Int(v) => v as f64,
            FieldValue::Float(v) => v,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Snapshot of the form, sent as the `/analyze` request body.
///
/// Numeric ranges are nominal only (age ≥ 0, exercise in 0..=7, ...); values are
/// forwarded as entered. `hobbies` never holds duplicates; catalog membership is
/// not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessInputs {
    pub age: i64,
    pub sleep: f64,
    pub screen_time: f64,
    pub social_interaction: i64,
    pub exercise: i64,
    pub hobbies: Vec<String>,
}

impl Default for WellnessInputs {
    fn default() -> Self {
        Self {
            age: 18,
            sleep: 7.0,
            screen_time: 4.0,
            social_interaction: 2,
            exercise: 1,
            hobbies: Vec::new(),
        }
    }
}

/// Scores and advice returned by the analysis endpoint. Deserialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessResult {
    pub wellness_level: String,
    pub depression_score: f64,
    pub depression_percent: f64,
    pub loneliness_score: f64,
    pub loneliness_percent: f64,
    pub recommendations: Vec<String>,
    /// Absent in the response means no links.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// A stored successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResult {
    pub result: WellnessResult,
    pub analyzed_at: DateTime<Utc>,
    /// Issue number of the request whose response this is.
    pub request_id: u64,
}

/// Result slot of the form. Failures never reach it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    #[default]
    Absent,
    Present(StoredResult),
}

impl ResultState {
    pub fn stored(&self) -> Option<&StoredResult> {
        match self {
            ResultState::Absent => None,
            ResultState::Present(stored) => Some(stored),
        }
    }

    pub fn result(&self) -> Option<&WellnessResult> {
        self.stored().map(|s| &s.result)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ResultState::Present(_))
    }
}
