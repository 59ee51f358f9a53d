use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::response::ApiError;

// Typed shapes for the JSON the completion collaborator is asked to produce.
// The collaborator is untrusted input: replies are deserialized strictly and
// anything missing or mistyped is rejected rather than coerced.

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecommendations {
    pub recommendations: Vec<VendorRecommendation>,
    pub total_estimated_cost: f64,
    pub budget_analysis: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecommendation {
    pub vendor_id: String,
    pub vendor_name: String,
    pub service_type: String,
    pub reason: String,
    pub estimated_cost: f64,
    pub special_considerations: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecommendations {
    pub budget_breakdown: Vec<BudgetAllocation>,
    pub cost_per_guest: f64,
    pub savings_suggestions: Vec<SavingsSuggestion>,
    pub alternative_options: Vec<AlternativeOption>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    pub vendor_type: String,
    pub allocation: f64,
    pub percentage_of_total: f64,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSuggestion {
    pub area: String,
    pub potential_savings: f64,
    pub impact: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeOption {
    pub description: String,
    pub estimated_savings: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSuggestions {
    pub recommended_price_range: PriceRange,
    pub optimal_price: f64,
    pub analysis: String,
    pub seasonal_strategy: Vec<SeasonalAdjustment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalAdjustment {
    pub season: String,
    pub adjustment_factor: f64,
    pub reasoning: String,
}

pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(ApiError::UpstreamParse)
}
