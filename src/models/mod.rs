pub mod filter;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use filter::{CategoryFilter, FilterCriteria};

/// A category name that does not exactly match any [`CarCategory`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown car category: {0}")]
pub struct UnknownCategory(pub String);

/// Body category of a listed car
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CarCategory {
    SUV,
    Sedan,
    Coupe,
    Hatchback,
    Convertible,
    Truck,
    Electric,
    Luxury,
}

impl CarCategory {
    pub const ALL: [CarCategory; 8] = [
        CarCategory::SUV,
        CarCategory::Sedan,
        CarCategory::Coupe,
        CarCategory::Hatchback,
        CarCategory::Convertible,
        CarCategory::Truck,
        CarCategory::Electric,
        CarCategory::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarCategory::SUV => "SUV",
            CarCategory::Sedan => "Sedan",
            CarCategory::Coupe => "Coupe",
            CarCategory::Hatchback => "Hatchback",
            CarCategory::Convertible => "Convertible",
            CarCategory::Truck => "Truck",
            CarCategory::Electric => "Electric",
            CarCategory::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for CarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Fuel kind of a listed car
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
}

/// Marketplace account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    /// Seller
    pub user_id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: u64,
    pub mileage: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub category: CarCategory,
    pub location: String,
    pub description: String,
    pub features: Vec<String>,
    /// First image is the primary one
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl Car {
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A listing as submitted by a seller, before it gets an id and timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub user_id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: u64,
    pub mileage: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub category: CarCategory,
    pub location: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

pub const DEFAULT_FEATURE: &str = "Standard Features";
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&q=80&w=1600";

/// Raw text values of the sell form
#[derive(Debug, Clone)]
pub struct SellForm {
    pub title: String,
    pub price: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: String,
    pub location: String,
    pub description: String,
    pub category: CarCategory,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub images: Vec<String>,
}

impl Default for SellForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            brand: String::new(),
            model: String::new(),
            year: Utc::now().year(),
            mileage: String::new(),
            location: String::new(),
            description: String::new(),
            category: CarCategory::Sedan,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            images: Vec::new(),
        }
    }
}

/// Coerce form text into a non-negative amount; anything unparsable becomes 0
fn coerce_amount(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

impl NewCar {
    /// Build a listing payload from the sell form on behalf of `owner`
    pub fn from_form(owner: &User, form: SellForm) -> Self {
        let images = if form.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            form.images
        };

        Self {
            user_id: owner.id.clone(),
            title: form.title,
            brand: form.brand,
            model: form.model,
            year: form.year,
            price: coerce_amount(&form.price),
            mileage: coerce_amount(&form.mileage),
            fuel_type: form.fuel_type,
            transmission: form.transmission,
            category: form.category,
            location: form.location,
            description: form.description,
            features: vec![DEFAULT_FEATURE.to_string()],
            images,
            is_featured: None,
        }
    }

    /// Attach an id and creation time, producing the stored record
    pub fn into_car(self, id: String, created_at: DateTime<Utc>) -> Car {
        Car {
            id,
            user_id: self.user_id,
            title: self.title,
            brand: self.brand,
            model: self.model,
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            category: self.category,
            location: self.location,
            description: self.description,
            features: self.features,
            images: self.images,
            created_at,
            is_featured: self.is_featured,
        }
    }
}
