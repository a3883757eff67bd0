//! Static preparedness knowledge base.
//!
//! Read-only lookup tables keyed by region, disaster type, and preparedness
//! level: which disasters apply to a region, how severe each disaster is,
//! which checklist a household should work through, and which actions and
//! tips to surface afterwards. Built once at startup and shared immutably.

use std::collections::HashMap;
use std::str::FromStr;

/// The nine disaster types every per-disaster table covers.
pub const DISASTER_TYPES: &[&str] = &[
    "Flood",
    "Earthquake",
    "Landslide",
    "Drought",
    "Severe Storm",
    "Cyclone",
    "Heatwave",
    "Cold Wave",
    "Industrial Hazard",
];

/// The preparedness levels the classifier can emit, in label-encoder order
/// (the encoder sorts alphabetically at training time).
pub const PREPAREDNESS_LEVELS: &[&str] =
    &["Moderately Prepared", "Needs Urgent Prep", "Well Prepared"];

/// Coarse severity classification of a disaster type.
///
/// Encoded numerically for model input: Low = 0, Medium = 1, High = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Numeric code used in the model's feature vector.
    pub fn code(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// How regions map to applicable disaster types.
///
/// The two observed deployments never reconciled this: one curates a
/// hand-picked subset per region, the other offers every disaster type
/// everywhere. Kept as an explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMode {
    /// Hand-picked disaster subsets for 17 high-exposure regions.
    Curated,
    /// Every state and union territory, each mapped to all nine types.
    Universal,
}

impl RegionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curated => "curated",
            Self::Universal => "universal",
        }
    }
}

impl FromStr for RegionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curated" => Ok(Self::Curated),
            "universal" => Ok(Self::Universal),
            other => Err(format!("unknown region mode: {other} (expected curated|universal)")),
        }
    }
}

// ── Region tables ──

const CURATED_REGIONS: &[(&str, &[&str])] = &[
    ("Assam", &["Flood", "Earthquake", "Landslide"]),
    ("Uttarakhand", &["Landslide", "Flood", "Earthquake"]),
    ("Gujarat", &["Earthquake", "Drought", "Severe Storm"]),
    ("Tamil Nadu", &["Cyclone", "Flood", "Heatwave"]),
    ("West Bengal", &["Cyclone", "Flood", "Landslide"]),
    ("Delhi", &["Heatwave", "Cold Wave"]),
    ("Rajasthan", &["Drought", "Heatwave"]),
    ("Bihar", &["Flood", "Heatwave", "Cold Wave"]),
    ("Maharashtra", &["Drought", "Cyclone", "Severe Storm"]),
    ("Andhra Pradesh", &["Cyclone", "Flood", "Severe Storm"]),
    ("Kerala", &["Landslide", "Flood"]),
    ("Himachal Pradesh", &["Landslide", "Cold Wave"]),
    ("Odisha", &["Cyclone", "Flood"]),
    ("Telangana", &["Heatwave", "Drought"]),
    ("Jharkhand", &["Drought", "Cold Wave"]),
    ("Punjab", &["Cold Wave", "Flood"]),
    ("Goa", &["Cyclone", "Flood"]),
];

const UNIVERSAL_REGIONS: &[&str] = &[
    // States
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    // Union territories
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

// ── Severity tiers ──

const HIGH_TIER: &[&str] = &["Earthquake", "Cyclone", "Flood"];
const MEDIUM_TIER: &[&str] = &["Landslide", "Severe Storm", "Industrial Hazard"];
const LOW_TIER: &[&str] = &["Drought", "Heatwave", "Cold Wave"];

// ── Checklist templates (10 items each, household survey order) ──

const CHECKLISTS: &[(&str, &[&str])] = &[
    (
        "Earthquake",
        &[
            "Secured heavy furniture",
            "Learned how to turn off utilities",
            "Emergency contact numbers known",
            "Prepared evacuation plan",
            "Kept shoes and flashlight beside bed",
            "First aid kit ready",
            "Important documents accessible",
            "Practiced earthquake drill",
            "Know nearest safe zone",
            "Know region's seismic history",
        ],
    ),
    (
        "Flood",
        &[
            "Know flood evacuation routes",
            "Have waterproof bags for documents",
            "First aid kit ready",
            "Food & water supplies",
            "Follow flood alerts",
            "Elevated electrical appliances",
            "Flood insurance taken",
            "Practiced flood drill",
            "Emergency contact numbers known",
            "Nearby shelters identified",
        ],
    ),
    (
        "Cyclone",
        &[
            "Reinforced windows and doors",
            "Tree branches trimmed",
            "Evacuation kit ready",
            "Important documents secured",
            "Battery-operated radio available",
            "Emergency contact numbers known",
            "Cyclone alerts followed",
            "Family trained on safety steps",
            "Mock drill done",
            "Water storage prepared",
        ],
    ),
    (
        "Drought",
        &[
            "Rainwater harvesting in place",
            "Water usage optimized",
            "Stored water for drinking",
            "Drip irrigation used",
            "Drought-resilient crops selected",
            "Emergency water plan",
            "Family informed of drought coping methods",
            "Local drought alerts followed",
            "Check wells and pumps",
            "Stored food",
        ],
    ),
    (
        "Cold Wave",
        &[
            "Warm clothing ready",
            "Heaters in safe condition",
            "Insulated home",
            "Emergency contact numbers known",
            "Backup heating source",
            "Food & water supplies",
            "Family trained for cold exposure",
            "Medical needs addressed",
            "Pets prepared",
            "Followed cold alerts",
        ],
    ),
    (
        "Heatwave",
        &[
            "Hydration plan followed",
            "Access to cool areas",
            "Avoided outdoor work during peak hours",
            "First aid for heatstroke known",
            "Family educated on symptoms",
            "Fans and AC functional",
            "Windows shaded",
            "Light cotton clothes used",
            "Followed heatwave alerts",
            "Mock drill conducted",
        ],
    ),
    (
        "Landslide",
        &[
            "Monitored slope signs",
            "Retaining walls checked",
            "Evacuation plan ready",
            "Emergency contact numbers known",
            "Drainage paths cleared",
            "Important items secured",
            "Followed weather updates",
            "Nearby shelters identified",
            "Practiced landslide drill",
            "Avoided unstable ground",
        ],
    ),
    (
        "Severe Storm",
        &[
            "Trimmed trees and shrubs",
            "Secured outdoor objects",
            "Emergency kit ready",
            "Listened to storm warnings",
            "Safe room identified",
            "Power backups ready",
            "Important papers waterproofed",
            "Mock drill done",
            "First aid kit ready",
            "Emergency contacts updated",
        ],
    ),
    (
        "Industrial Hazard",
        &[
            "Know local industry risks",
            "Toxic leak evacuation plan",
            "Gas masks and filters ready",
            "Government alerts followed",
            "Emergency contact numbers known",
            "Safe routes identified",
            "Community drill participated",
            "Important documents safe",
            "Family trained",
            "Nearby hospitals listed",
        ],
    ),
];

// ── Curated mitigation actions (beyond the checklist itself) ──

const ACTIONS: &[(&str, &[&str])] = &[
    (
        "Earthquake",
        &[
            "Secure your home structure with a professional inspection.",
            "Install seismic shut-off valves for gas lines.",
            "Join a local community earthquake awareness group.",
        ],
    ),
    (
        "Flood",
        &[
            "Install water sensors in flood-prone areas.",
            "Keep sandbags ready for quick use.",
            "Subscribe to SMS flood alerts from local authorities.",
        ],
    ),
    (
        "Cyclone",
        &[
            "Reinforce your home's roofing materials.",
            "Establish a cyclone-safe room in your home.",
            "Register for community cyclone warning updates.",
        ],
    ),
    (
        "Drought",
        &[
            "Invest in a water-efficient irrigation system.",
            "Monitor local groundwater levels regularly.",
            "Collaborate with neighbors to manage water usage.",
        ],
    ),
    (
        "Cold Wave",
        &[
            "Insulate plumbing to prevent freezing.",
            "Check on elderly neighbors during extreme cold.",
            "Register for cold wave alerts from the local government.",
        ],
    ),
    (
        "Heatwave",
        &[
            "Create a cool room with blackout curtains and fans.",
            "Coordinate with neighbors for mutual aid during heat spikes.",
            "Join a local heatwave preparedness campaign.",
        ],
    ),
    (
        "Landslide",
        &[
            "Install proper drainage systems around your home.",
            "Avoid heavy construction near slopes.",
            "Use vegetation to help stabilize soil.",
        ],
    ),
    (
        "Severe Storm",
        &[
            "Anchor outdoor structures like sheds or swings.",
            "Get your roof inspected before storm season.",
            "Keep mobile phone power banks charged at all times.",
        ],
    ),
    (
        "Industrial Hazard",
        &[
            "Attend safety training from local industries.",
            "Install indoor air quality sensors.",
            "Keep an emergency go-bag with safety gear and essentials.",
        ],
    ),
];

// ── Improvement tips per preparedness level ──

const TIPS: &[(&str, &[&str])] = &[
    (
        "Needs Urgent Prep",
        &[
            "Complete all urgent checklist items immediately.",
            "Create an evacuation plan and share with family.",
        ],
    ),
    (
        "Moderately Prepared",
        &[
            "Review missing checklist items.",
            "Conduct a disaster drill with household members.",
        ],
    ),
    (
        "Well Prepared",
        &[
            "Stay updated with local disaster alerts.",
            "Refresh emergency supplies every 6 months.",
        ],
    ),
];

/// Read-only preparedness lookup tables.
///
/// Constructed once from the static tables above and passed by reference to
/// the components that need it; never a global, so tests can build substitute
/// instances with [`KnowledgeBase::from_parts`].
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    regions: Vec<String>,
    region_disasters: HashMap<String, Vec<String>>,
    risk_tiers: HashMap<String, RiskTier>,
    checklists: HashMap<String, Vec<String>>,
    actions: HashMap<String, Vec<String>>,
    tips: HashMap<String, Vec<String>>,
}

/// Table sizes, for startup logging.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeSummary {
    pub regions: usize,
    pub disaster_types: usize,
    pub checklist_items: usize,
    pub action_count: usize,
    pub tip_levels: usize,
}

impl KnowledgeBase {
    /// Build the full knowledge base for the given region mapping mode.
    pub fn new(mode: RegionMode) -> Self {
        let (regions, region_disasters) = match mode {
            RegionMode::Curated => {
                let regions: Vec<String> =
                    CURATED_REGIONS.iter().map(|(r, _)| (*r).to_string()).collect();
                let map = CURATED_REGIONS
                    .iter()
                    .map(|(r, ds)| {
                        ((*r).to_string(), ds.iter().map(|d| (*d).to_string()).collect())
                    })
                    .collect();
                (regions, map)
            }
            RegionMode::Universal => {
                let regions: Vec<String> =
                    UNIVERSAL_REGIONS.iter().map(|r| (*r).to_string()).collect();
                let all: Vec<String> = DISASTER_TYPES.iter().map(|d| (*d).to_string()).collect();
                let map = regions.iter().map(|r| (r.clone(), all.clone())).collect();
                (regions, map)
            }
        };

        let mut risk_tiers = HashMap::new();
        for &d in HIGH_TIER {
            risk_tiers.insert(d.to_string(), RiskTier::High);
        }
        for &d in MEDIUM_TIER {
            risk_tiers.insert(d.to_string(), RiskTier::Medium);
        }
        for &d in LOW_TIER {
            risk_tiers.insert(d.to_string(), RiskTier::Low);
        }

        Self {
            regions,
            region_disasters,
            risk_tiers,
            checklists: owned_table(CHECKLISTS),
            actions: owned_table(ACTIONS),
            tips: owned_table(TIPS),
        }
    }

    /// Assemble a knowledge base from explicit tables (test substitution).
    pub fn from_parts(
        regions: Vec<String>,
        region_disasters: HashMap<String, Vec<String>>,
        risk_tiers: HashMap<String, RiskTier>,
        checklists: HashMap<String, Vec<String>>,
        actions: HashMap<String, Vec<String>>,
        tips: HashMap<String, Vec<String>>,
    ) -> Self {
        Self { regions, region_disasters, risk_tiers, checklists, actions, tips }
    }

    /// Ordered region list, as the survey presents it.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// The full region-to-disasters table.
    pub fn region_table(&self) -> &HashMap<String, Vec<String>> {
        &self.region_disasters
    }

    /// Disaster types applicable to a region.
    pub fn disaster_types_for_region(&self, region: &str) -> Result<&[String], crate::CoreError> {
        self.region_disasters
            .get(region)
            .map(Vec::as_slice)
            .ok_or_else(|| crate::CoreError::UnknownRegion(region.to_string()))
    }

    /// Ordered checklist template for a disaster type.
    pub fn checklist_template(&self, disaster_type: &str) -> Result<&[String], crate::CoreError> {
        self.checklists
            .get(disaster_type)
            .map(Vec::as_slice)
            .ok_or_else(|| crate::CoreError::UnknownDisaster(disaster_type.to_string()))
    }

    /// Severity tier of a disaster type. Total: unknown types are Medium.
    pub fn risk_tier(&self, disaster_type: &str) -> RiskTier {
        self.risk_tiers.get(disaster_type).copied().unwrap_or(RiskTier::Medium)
    }

    /// Curated mitigation actions for a disaster type; empty if unknown.
    pub fn action_list(&self, disaster_type: &str) -> &[String] {
        self.actions.get(disaster_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Improvement tips for a preparedness level; empty if unrecognised.
    pub fn improvement_tips(&self, level: &str) -> &[String] {
        self.tips.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Table sizes.
    pub fn summary(&self) -> KnowledgeSummary {
        KnowledgeSummary {
            regions: self.regions.len(),
            disaster_types: self.checklists.len(),
            checklist_items: self.checklists.values().map(Vec::len).sum(),
            action_count: self.actions.values().map(Vec::len).sum(),
            tip_levels: self.tips.len(),
        }
    }
}

fn owned_table(table: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    table
        .iter()
        .map(|(k, vs)| ((*k).to_string(), vs.iter().map(|v| (*v).to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_mode_has_seventeen_regions() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        assert_eq!(kb.regions().len(), 17);
        assert_eq!(kb.regions()[0], "Assam");
    }

    #[test]
    fn universal_mode_has_thirty_six_regions() {
        let kb = KnowledgeBase::new(RegionMode::Universal);
        assert_eq!(kb.regions().len(), 36);
    }

    #[test]
    fn universal_mode_maps_every_region_to_all_types() {
        let kb = KnowledgeBase::new(RegionMode::Universal);
        assert_eq!(kb.region_table().len(), kb.regions().len());
        for region in kb.regions() {
            let disasters = kb.disaster_types_for_region(region).unwrap();
            assert_eq!(disasters.len(), DISASTER_TYPES.len(), "{region} missing types");
        }
    }

    #[test]
    fn curated_disasters_are_canonical() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        for region in kb.regions() {
            for disaster in kb.disaster_types_for_region(region).unwrap() {
                assert!(
                    DISASTER_TYPES.contains(&disaster.as_str()),
                    "{region} lists non-canonical type {disaster}"
                );
            }
        }
    }

    #[test]
    fn unknown_region_errors() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let err = kb.disaster_types_for_region("Unknownistan").unwrap_err();
        assert!(matches!(err, crate::CoreError::UnknownRegion(_)));
    }

    #[test]
    fn every_disaster_has_ten_checklist_items() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        for &disaster in DISASTER_TYPES {
            let template = kb.checklist_template(disaster).unwrap();
            assert_eq!(template.len(), 10, "{disaster} template wrong length");
        }
    }

    #[test]
    fn unknown_disaster_checklist_errors() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let err = kb.checklist_template("Meteor Strike").unwrap_err();
        assert!(matches!(err, crate::CoreError::UnknownDisaster(_)));
    }

    #[test]
    fn risk_tier_codes() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        assert_eq!(kb.risk_tier("Flood").code(), 2);
        assert_eq!(kb.risk_tier("Landslide").code(), 1);
        assert_eq!(kb.risk_tier("Drought").code(), 0);
    }

    #[test]
    fn risk_tier_is_total_with_medium_default() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        assert_eq!(kb.risk_tier("Meteor Strike"), RiskTier::Medium);
        assert_eq!(kb.risk_tier(""), RiskTier::Medium);
        assert_eq!(kb.risk_tier("flood"), RiskTier::Medium, "lookup is case-sensitive");
    }

    #[test]
    fn every_disaster_has_three_actions() {
        let kb = KnowledgeBase::new(RegionMode::Universal);
        for &disaster in DISASTER_TYPES {
            assert_eq!(kb.action_list(disaster).len(), 3, "{disaster} action list wrong length");
        }
    }

    #[test]
    fn unknown_disaster_actions_empty() {
        let kb = KnowledgeBase::new(RegionMode::Universal);
        assert!(kb.action_list("Meteor Strike").is_empty());
    }

    #[test]
    fn tips_cover_all_levels() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        for &level in PREPAREDNESS_LEVELS {
            assert_eq!(kb.improvement_tips(level).len(), 2, "{level} tips wrong length");
        }
        assert!(kb.improvement_tips("Somewhat Ready").is_empty());
    }

    #[test]
    fn summary_counts() {
        let kb = KnowledgeBase::new(RegionMode::Curated);
        let s = kb.summary();
        assert_eq!(s.regions, 17);
        assert_eq!(s.disaster_types, 9);
        assert_eq!(s.checklist_items, 90);
        assert_eq!(s.action_count, 27);
        assert_eq!(s.tip_levels, 3);
    }

    #[test]
    fn region_mode_parses() {
        assert_eq!("curated".parse::<RegionMode>().unwrap(), RegionMode::Curated);
        assert_eq!("universal".parse::<RegionMode>().unwrap(), RegionMode::Universal);
        assert!("both".parse::<RegionMode>().is_err());
    }
}
