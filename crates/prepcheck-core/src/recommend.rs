//! Recommendation selection: which guidance to surface for a disaster type
//! and preparedness level.
//!
//! Two policies ship, mirroring the two deployed entry points, and they are
//! deliberately not reconciled: the API slices the checklist template by
//! level, the form UI always shows the curated action list. Callers pick one
//! by name.

use std::str::FromStr;

use crate::knowledge::KnowledgeBase;

/// Named selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationPolicy {
    /// Slice the disaster's checklist template by preparedness level.
    TieredChecklist,
    /// Always return the disaster's full curated action list; level ignored.
    FixedActions,
}

impl RecommendationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TieredChecklist => "tiered-checklist",
            Self::FixedActions => "fixed-actions",
        }
    }
}

impl FromStr for RecommendationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiered-checklist" => Ok(Self::TieredChecklist),
            "fixed-actions" => Ok(Self::FixedActions),
            other => Err(format!(
                "unknown recommendation policy: {other} (expected tiered-checklist|fixed-actions)"
            )),
        }
    }
}

/// Select the recommendations to show.
///
/// Unknown disaster types yield an empty list under both policies; absence
/// from the tables is not an error at this layer.
pub fn recommend(
    kb: &KnowledgeBase,
    policy: RecommendationPolicy,
    disaster_type: &str,
    level: &str,
) -> Vec<String> {
    match policy {
        RecommendationPolicy::TieredChecklist => {
            let template = kb.checklist_template(disaster_type).unwrap_or(&[]);
            match level {
                "Needs Urgent Prep" => template.iter().take(3).cloned().collect(),
                "Moderately Prepared" => template.iter().skip(3).take(3).cloned().collect(),
                // Any other level, recognised or not, gets the full template.
                // Unrecognised levels therefore read as fully prepared; kept
                // for compatibility with the deployed behaviour.
                _ => template.to_vec(),
            }
        }
        RecommendationPolicy::FixedActions => kb.action_list(disaster_type).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::RegionMode;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new(RegionMode::Curated)
    }

    #[test]
    fn tiered_urgent_takes_first_three() {
        let kb = kb();
        let recs = recommend(&kb, RecommendationPolicy::TieredChecklist, "Flood", "Needs Urgent Prep");
        let template = kb.checklist_template("Flood").unwrap();
        assert_eq!(recs, template[..3].to_vec());
    }

    #[test]
    fn tiered_moderate_takes_middle_three() {
        let kb = kb();
        let recs =
            recommend(&kb, RecommendationPolicy::TieredChecklist, "Flood", "Moderately Prepared");
        let template = kb.checklist_template("Flood").unwrap();
        assert_eq!(recs, template[3..6].to_vec());
    }

    #[test]
    fn tiered_well_prepared_takes_whole_template() {
        let kb = kb();
        let recs = recommend(&kb, RecommendationPolicy::TieredChecklist, "Flood", "Well Prepared");
        assert_eq!(recs.len(), 10);
    }

    #[test]
    fn tiered_unknown_level_falls_back_to_whole_template() {
        // Known quirk, preserved: an unrecognised level is indistinguishable
        // from "Well Prepared" under this policy.
        let kb = kb();
        let recs = recommend(&kb, RecommendationPolicy::TieredChecklist, "Flood", "Slightly Ready");
        assert_eq!(recs.len(), 10);
    }

    #[test]
    fn tiered_unknown_disaster_is_empty() {
        let kb = kb();
        let recs =
            recommend(&kb, RecommendationPolicy::TieredChecklist, "Meteor Strike", "Well Prepared");
        assert!(recs.is_empty());
    }

    #[test]
    fn fixed_ignores_level() {
        let kb = kb();
        let urgent =
            recommend(&kb, RecommendationPolicy::FixedActions, "Earthquake", "Needs Urgent Prep");
        let well = recommend(&kb, RecommendationPolicy::FixedActions, "Earthquake", "Well Prepared");
        let nonsense = recommend(&kb, RecommendationPolicy::FixedActions, "Earthquake", "???");

        assert_eq!(urgent.len(), 3);
        assert_eq!(urgent, well);
        assert_eq!(urgent, nonsense);
    }

    #[test]
    fn fixed_unknown_disaster_is_empty() {
        let kb = kb();
        let recs = recommend(&kb, RecommendationPolicy::FixedActions, "Meteor Strike", "Well Prepared");
        assert!(recs.is_empty());
    }

    #[test]
    fn tiered_short_template_clamps_slices() {
        // Substitute table with a 4-item template: the moderate slice only
        // has one item left to take.
        use std::collections::HashMap;
        let mut checklists = HashMap::new();
        checklists.insert(
            "Fog".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
        );
        let kb = KnowledgeBase::from_parts(
            Vec::new(),
            HashMap::new(),
            HashMap::new(),
            checklists,
            HashMap::new(),
            HashMap::new(),
        );

        let recs = recommend(&kb, RecommendationPolicy::TieredChecklist, "Fog", "Moderately Prepared");
        assert_eq!(recs, vec!["d".to_string()]);
    }

    #[test]
    fn policy_parses() {
        assert_eq!(
            "tiered-checklist".parse::<RecommendationPolicy>().unwrap(),
            RecommendationPolicy::TieredChecklist
        );
        assert_eq!(
            "fixed-actions".parse::<RecommendationPolicy>().unwrap(),
            RecommendationPolicy::FixedActions
        );
        assert!("none".parse::<RecommendationPolicy>().is_err());
    }
}
