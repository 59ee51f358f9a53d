use serde::Deserialize;
use serde_json::{Map, Value};

use crate::engine::snapshot::{MarketPrice, PastVendorPreference, VendorSnapshot};
use crate::models::event::Event;
use crate::models::vendor::ServiceType;

pub const VENDOR_RECOMMENDER_ROLE: &str =
    "You are an AI event planning assistant that provides personalized vendor recommendations.";

pub const BUDGET_PLANNER_ROLE: &str =
    "You are an AI event planning assistant that provides personalized budget recommendations.";

pub const SOCIAL_MEDIA_ROLE: &str =
    "You are an AI social media content creator that generates engaging event announcements.";

pub const PRICING_ANALYST_ROLE: &str =
    "You are an AI pricing analyst that provides market-based pricing suggestions for event vendors.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecommendationCriteria {
    pub event_type: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub guest_count: Option<i64>,
    pub preferences: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCriteria {
    pub event_type: Option<String>,
    pub total_budget: Option<f64>,
    pub guest_count: Option<i64>,
    pub location: Option<String>,
    pub preferences: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCriteria {
    pub service_type: Option<ServiceType>,
    pub service_name: Option<String>,
    pub current_price: Option<f64>,
}

fn text_or_not_specified(value: Option<&str>) -> &str {
    value.unwrap_or("Not specified")
}

fn number_or_not_specified<T: ToString>(value: Option<T>) -> String {
    value
        .map(|number| number.to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}

pub fn vendor_recommendation_prompt(
    vendors: &[VendorSnapshot],
    past_preferences: &[PastVendorPreference],
    criteria: &VendorRecommendationCriteria,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "I need vendor recommendations for an event with the following criteria:\n\
         - Event Type: {event_type}\n\
         - Budget: {budget}\n\
         - Location: {location}\n\
         - Guest Count: {guest_count}\n\
         - Additional Preferences: {preferences}\n\
         \n\
         The user has previously booked these types of vendors:\n\
         {past}\n\
         \n\
         Here are the available vendors:\n\
         {vendors}\n\
         \n\
         Please provide recommendations for each vendor type needed for this event. For each \
         recommendation include the vendor id, why this vendor is recommended, the estimated \
         cost and any special considerations.\n\
         \n\
         Format your response as a JSON object with the following structure:\n\
         {{\n\
           \"recommendations\": [\n\
             {{\n\
               \"vendorId\": \"id\",\n\
               \"vendorName\": \"name\",\n\
               \"serviceType\": \"type\",\n\
               \"reason\": \"reason for recommendation\",\n\
               \"estimatedCost\": number,\n\
               \"specialConsiderations\": \"any special notes\"\n\
             }}\n\
           ],\n\
           \"totalEstimatedCost\": number,\n\
           \"budgetAnalysis\": \"analysis of how these recommendations fit within the budget\"\n\
         }}",
        event_type = text_or_not_specified(criteria.event_type.as_deref()),
        budget = number_or_not_specified(criteria.budget),
        location = text_or_not_specified(criteria.location.as_deref()),
        guest_count = number_or_not_specified(criteria.guest_count),
        preferences = criteria.preferences.as_deref().unwrap_or("None"),
        past = serde_json::to_string(past_preferences)?,
        vendors = serde_json::to_string(vendors)?,
    ))
}

pub fn budget_prompt(
    average_costs: &[(ServiceType, f64)],
    criteria: &BudgetCriteria,
) -> Result<String, serde_json::Error> {
    let mut costs = Map::new();
    for (service_type, cost) in average_costs {
        costs.insert(service_type.as_str().to_string(), Value::from(*cost));
    }

    Ok(format!(
        "I need budget recommendations for an event with the following criteria:\n\
         - Event Type: {event_type}\n\
         - Total Budget: {total_budget}\n\
         - Guest Count: {guest_count}\n\
         - Location: {location}\n\
         - Additional Preferences: {preferences}\n\
         \n\
         Here are the average costs for different vendor types in this area:\n\
         {costs}\n\
         \n\
         Please provide a detailed budget breakdown for this event, including the recommended \
         allocation for each vendor type, the estimated cost per guest, areas where costs can \
         be reduced if needed, and alternative options for staying within budget.\n\
         \n\
         Format your response as a JSON object with the following structure:\n\
         {{\n\
           \"budgetBreakdown\": [\n\
             {{\n\
               \"vendorType\": \"type\",\n\
               \"allocation\": number,\n\
               \"percentageOfTotal\": number,\n\
               \"notes\": \"any special notes\"\n\
             }}\n\
           ],\n\
           \"costPerGuest\": number,\n\
           \"savingsSuggestions\": [\n\
             {{\n\
               \"area\": \"area where costs can be reduced\",\n\
               \"potentialSavings\": number,\n\
               \"impact\": \"description of impact on event quality\"\n\
             }}\n\
           ],\n\
           \"alternativeOptions\": [\n\
             {{\n\
               \"description\": \"alternative approach\",\n\
               \"estimatedSavings\": number\n\
             }}\n\
           ]\n\
         }}",
        event_type = text_or_not_specified(criteria.event_type.as_deref()),
        total_budget = number_or_not_specified(criteria.total_budget),
        guest_count = number_or_not_specified(criteria.guest_count),
        location = text_or_not_specified(criteria.location.as_deref()),
        preferences = criteria.preferences.as_deref().unwrap_or("None"),
        costs = serde_json::to_string(&Value::Object(costs))?,
    ))
}

pub fn social_media_prompt(event: &Event, platform: &str, tone: Option<&str>) -> String {
    format!(
        "I need to create a social media post announcing an event with the following details:\n\
         - Event Name: {title}\n\
         - Event Type: {event_type}\n\
         - Date: {date}\n\
         - Location: {location}\n\
         - Description: {description}\n\
         \n\
         The post should be for {platform} and have a {tone} tone.\n\
         \n\
         Please create an engaging post that would generate excitement about this event. \
         Include appropriate hashtags and a call to action.",
        title = event.title,
        event_type = event.event_type.as_str(),
        date = event.date.format("%B %-d, %Y"),
        location = event.location,
        description = event.description,
        platform = platform,
        tone = tone.unwrap_or("friendly"),
    )
}

pub fn pricing_suggestion_prompt(
    market: &[MarketPrice],
    service_type: ServiceType,
    criteria: &PricingCriteria,
    vendor_rating: f64,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "I need pricing suggestions for a vendor service with the following details:\n\
         - Service Type: {service_type}\n\
         - Service Name: {service_name}\n\
         - Current Price: {current_price}\n\
         - Vendor Rating: {vendor_rating}\n\
         \n\
         Here is market data for similar services:\n\
         {market}\n\
         \n\
         Please provide pricing suggestions based on this market data, including a recommended \
         price range, an optimal price point, an analysis of how the vendor's rating affects \
         pricing, and a seasonal pricing strategy.\n\
         \n\
         Format your response as a JSON object with the following structure:\n\
         {{\n\
           \"recommendedPriceRange\": {{\n\
             \"min\": number,\n\
             \"max\": number\n\
           }},\n\
           \"optimalPrice\": number,\n\
           \"analysis\": \"detailed analysis of pricing recommendation\",\n\
           \"seasonalStrategy\": [\n\
             {{\n\
               \"season\": \"season name\",\n\
               \"adjustmentFactor\": number,\n\
               \"reasoning\": \"reason for adjustment\"\n\
             }}\n\
           ]\n\
         }}",
        service_type = service_type.as_str(),
        service_name = text_or_not_specified(criteria.service_name.as_deref()),
        current_price = number_or_not_specified(criteria.current_price),
        vendor_rating = vendor_rating,
        market = serde_json::to_string(market)?,
    ))
}
