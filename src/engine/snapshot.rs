use serde::Serialize;
use uuid::Uuid;

use crate::models::vendor::{PriceUnit, ServiceType, Vendor};

// Bounded, point-in-time views of stored entities, shaped for prompt
// embedding. Nothing here is persisted.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSnapshot {
    pub id: Uuid,
    pub business_name: String,
    pub service_type: ServiceType,
    pub rating: f64,
    pub services: Vec<ServicePricing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    pub name: String,
    pub price: f64,
    pub price_unit: PriceUnit,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastVendorPreference {
    pub service_type: ServiceType,
    pub rating: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub price: f64,
    pub price_unit: PriceUnit,
    pub vendor_rating: f64,
}

impl From<&Vendor> for VendorSnapshot {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            business_name: vendor.business_name.clone(),
            service_type: vendor.service_type,
            rating: vendor.average_rating,
            services: vendor
                .services
                .iter()
                .map(|service| ServicePricing {
                    name: service.name.clone(),
                    price: service.price,
                    price_unit: service.price_unit,
                })
                .collect(),
        }
    }
}

// Mean listed price across every service of the given vendors. None when
// there is nothing to average.
pub fn average_service_cost(vendors: &[Vendor]) -> Option<f64> {
    let prices: Vec<f64> = vendors
        .iter()
        .flat_map(|vendor| vendor.services.iter().map(|service| service.price))
        .collect();

    if prices.is_empty() {
        return None;
    }

    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}

// Price samples for comparable services, optionally narrowed to services
// whose name contains the given fragment (case-insensitive).
pub fn market_prices(vendors: &[Vendor], service_name: Option<&str>) -> Vec<MarketPrice> {
    let needle = service_name.map(str::to_lowercase);

    vendors
        .iter()
        .flat_map(|vendor| {
            vendor
                .services
                .iter()
                .filter(|service| match &needle {
                    Some(fragment) => service.name.to_lowercase().contains(fragment),
                    None => true,
                })
                .map(|service| MarketPrice {
                    price: service.price,
                    price_unit: service.price_unit,
                    vendor_rating: vendor.average_rating,
                })
        })
        .collect()
}
