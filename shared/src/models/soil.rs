//! Soil report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A soil analysis report for one field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilReport {
    pub soil_type: String,
    pub ph: f64,
    // Primary macronutrients (NPK)
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    // Secondary macronutrients
    pub calcium: f64,
    pub magnesium: f64,
    pub sulfur: f64,
    // Micronutrients
    pub zinc: f64,
    pub iron: f64,
    pub manganese: f64,
    pub copper: f64,
    pub boron: f64,
    pub molybdenum: f64,
    // Physical properties
    pub organic_matter: f64,
    pub cec: f64,
    pub water_capacity: f64,
    pub soil_temperature: f64,
    pub soil_compaction: f64,
    // Composition
    pub sand_percent: u32,
    pub silt_percent: u32,
    pub clay_percent: u32,
    pub history: Vec<SoilSample>,
}

/// A historical soil sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSample {
    pub date: NaiveDate,
    pub ph: f64,
    pub organic_matter: f64,
    pub nitrogen: f64,
}
