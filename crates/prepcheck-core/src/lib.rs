pub mod error;
pub mod features;
pub mod knowledge;
pub mod recommend;

pub use error::CoreError;
pub use features::{
    ChecklistResponse, FeatureVector, HouseholdProfile, awareness_score, build_feature_vector,
    completion_percentage,
};
pub use knowledge::{
    DISASTER_TYPES, KnowledgeBase, KnowledgeSummary, PREPAREDNESS_LEVELS, RegionMode, RiskTier,
};
pub use recommend::{RecommendationPolicy, recommend};
