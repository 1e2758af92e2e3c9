use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who is being assessed and when. All three fields are free text; the
/// wizard only checks that they are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identification {
    pub patient_name: String,
    pub patient_id: String,
    pub assessment_date: String,
}

impl Identification {
    pub fn new(
        patient_name: impl Into<String>,
        patient_id: impl Into<String>,
        assessment_date: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            patient_id: patient_id.into(),
            assessment_date: assessment_date.into(),
        }
    }

    /// True when every field is non-empty. Content is not validated, so a
    /// date of `"tomorrow-ish"` passes.
    pub fn is_complete(&self) -> bool {
        !self.patient_name.is_empty()
            && !self.patient_id.is_empty()
            && !self.assessment_date.is_empty()
    }

    /// Names of the fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient_name.is_empty() {
            missing.push("patient_name");
        }
        if self.patient_id.is_empty() {
            missing.push("patient_id");
        }
        if self.assessment_date.is_empty() {
            missing.push("assessment_date");
        }
        missing
    }
}
