//! Feature derivation: raw survey answers to the model's numeric inputs.
//!
//! Pure transforms with no I/O. The feature order is fixed by the trained
//! model and must never change without retraining; see
//! [`FeatureVector::FEATURE_NAMES`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::knowledge::KnowledgeBase;

/// Checklist item name to completed-or-not, as the household answered it.
pub type ChecklistResponse = HashMap<String, bool>;

/// One household's raw survey answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub household_size: u32,
    pub has_kit: bool,
    pub disaster_type: String,
    pub checklist: ChecklistResponse,
}

/// The five model inputs, in training-time order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub household_size: u32,
    /// Kit ownership as 0/1.
    pub kit_owned: u8,
    /// Share of checklist items completed, 0–100.
    pub completion_percent: f64,
    /// Raw count of completed checklist items.
    pub awareness_score: u32,
    /// Severity code of the disaster type, 0/1/2.
    pub risk_tier_code: u8,
}

impl FeatureVector {
    /// Column names the model was trained with, in order. Artifact loading
    /// validates the shipped `features.json` against this list.
    pub const FEATURE_NAMES: [&'static str; 5] = [
        "Household Size",
        "Disaster Kit Owned",
        "Checklist Completion %",
        "Awareness Score",
        "Risk Tier",
    ];

    /// The vector as a single inference row, in [`Self::FEATURE_NAMES`] order.
    pub fn to_row(&self) -> [f32; 5] {
        [
            self.household_size as f32,
            f32::from(self.kit_owned),
            self.completion_percent as f32,
            self.awareness_score as f32,
            f32::from(self.risk_tier_code),
        ]
    }
}

/// Share of checklist items marked complete, 0–100.
///
/// An empty response map is rejected rather than divided by zero; the
/// presentation layer validates this too, but the guard is cheap to keep
/// here where the division happens.
pub fn completion_percentage(responses: &ChecklistResponse) -> Result<f64, CoreError> {
    if responses.is_empty() {
        return Err(CoreError::EmptyChecklist);
    }
    let done = responses.values().filter(|&&v| v).count();
    Ok(done as f64 / responses.len() as f64 * 100.0)
}

/// Raw count of completed checklist items. Zero for an empty map, which is
/// valid here (unlike completion, there is nothing to divide by).
pub fn awareness_score(responses: &ChecklistResponse) -> u32 {
    responses.values().filter(|&&v| v).count() as u32
}

/// Assemble the model's feature vector from a household profile.
pub fn build_feature_vector(
    profile: &HouseholdProfile,
    kb: &KnowledgeBase,
) -> Result<FeatureVector, CoreError> {
    if profile.household_size < 1 {
        return Err(CoreError::InvalidHouseholdSize(profile.household_size));
    }

    Ok(FeatureVector {
        household_size: profile.household_size,
        kit_owned: u8::from(profile.has_kit),
        completion_percent: completion_percentage(&profile.checklist)?,
        awareness_score: awareness_score(&profile.checklist),
        risk_tier_code: kb.risk_tier(&profile.disaster_type).code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::RegionMode;

    fn responses(pairs: &[(&str, bool)]) -> ChecklistResponse {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    fn profile(size: u32, kit: bool, disaster: &str, pairs: &[(&str, bool)]) -> HouseholdProfile {
        HouseholdProfile {
            household_size: size,
            has_kit: kit,
            disaster_type: disaster.to_string(),
            checklist: responses(pairs),
        }
    }

    #[test]
    fn completion_half_done() {
        let r = responses(&[("a", true), ("b", true), ("c", false), ("d", false)]);
        assert_eq!(completion_percentage(&r).unwrap(), 50.0);
    }

    #[test]
    fn completion_bounds() {
        let none = responses(&[("a", false), ("b", false)]);
        let all = responses(&[("a", true), ("b", true)]);
        assert_eq!(completion_percentage(&none).unwrap(), 0.0);
        assert_eq!(completion_percentage(&all).unwrap(), 100.0);
    }

    #[test]
    fn completion_equals_normalised_awareness() {
        let r = responses(&[("a", true), ("b", false), ("c", true), ("d", true), ("e", false)]);
        let completion = completion_percentage(&r).unwrap();
        let awareness = awareness_score(&r);
        let expected = 100.0 * f64::from(awareness) / r.len() as f64;
        assert!((completion - expected).abs() < 1e-9, "got {completion}, expected {expected}");
    }

    #[test]
    fn completion_rejects_empty_map() {
        let err = completion_percentage(&ChecklistResponse::new()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyChecklist));
    }

    #[test]
    fn awareness_zero_for_empty_map() {
        assert_eq!(awareness_score(&ChecklistResponse::new()), 0);
    }

    #[test]
    fn flood_household_scenario() {
        // Reference scenario: 4-person household with a kit, half the
        // checklist done, Flood is a High-tier disaster.
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let p = profile(4, true, "Flood", &[("a", true), ("b", true), ("c", false), ("d", false)]);

        let fv = build_feature_vector(&p, &kb).unwrap();
        assert_eq!(fv.awareness_score, 2);
        assert_eq!(fv.completion_percent, 50.0);
        assert_eq!(fv.risk_tier_code, 2);
        assert_eq!(fv.to_row(), [4.0, 1.0, 50.0, 2.0, 2.0]);
    }

    #[test]
    fn unknown_disaster_defaults_to_medium_tier() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let p = profile(2, false, "Meteor Strike", &[("a", true)]);
        let fv = build_feature_vector(&p, &kb).unwrap();
        assert_eq!(fv.risk_tier_code, 1);
    }

    #[test]
    fn zero_household_size_rejected() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let p = profile(0, true, "Flood", &[("a", true)]);
        let err = build_feature_vector(&p, &kb).unwrap_err();
        assert!(matches!(err, CoreError::InvalidHouseholdSize(0)));
    }

    #[test]
    fn empty_checklist_propagates_through_vector_build() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let p = profile(3, true, "Flood", &[]);
        let err = build_feature_vector(&p, &kb).unwrap_err();
        assert!(matches!(err, CoreError::EmptyChecklist));
    }

    #[test]
    fn feature_names_match_vector_arity() {
        let fv = FeatureVector {
            household_size: 1,
            kit_owned: 0,
            completion_percent: 0.0,
            awareness_score: 0,
            risk_tier_code: 1,
        };
        assert_eq!(fv.to_row().len(), FeatureVector::FEATURE_NAMES.len());
    }
}
