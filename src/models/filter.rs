use crate::models::{Car, CarCategory};
use serde::Serialize;
use tracing::debug;

/// Category constraint as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    Is(CarCategory),
    /// A name that is not a known category; matches no listing
    Unknown(String),
}

impl From<CarCategory> for CategoryFilter {
    fn from(category: CarCategory) -> Self {
        CategoryFilter::Is(category)
    }
}

/// Constraints applied to a listing collection.
///
/// Every field is optional; `None` means no constraint on that dimension.
/// Text fields match as case-insensitive substrings, prices are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub category: Option<CategoryFilter>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Build criteria from raw key/value input such as query parameters.
    ///
    /// Parsing is permissive: blank values and numbers that do not parse are
    /// dropped instead of rejected. A category name is compared exactly, so an
    /// unknown or wrongly cased one still constrains and matches nothing.
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "brand" => criteria.brand = non_blank(value),
                "model" => criteria.model = non_blank(value),
                "location" => criteria.location = non_blank(value),
                "category" => criteria.category = parse_category(value),
                "minPrice" => criteria.min_price = parse_bound(value),
                "maxPrice" => criteria.max_price = parse_bound(value),
                other => debug!("Ignoring unknown filter key: {}", other),
            }
        }

        criteria
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// True when `car` satisfies every present constraint
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(brand) = &self.brand {
            if !contains_ignore_case(&car.brand, brand) {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if !contains_ignore_case(&car.model, model) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains_ignore_case(&car.location, location) {
                return false;
            }
        }
        match &self.category {
            Some(CategoryFilter::Is(category)) if car.category != *category => return false,
            Some(CategoryFilter::Unknown(_)) => return false,
            _ => {}
        }

        let price = car.price as f64;
        if let Some(min) = self.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn non_blank(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => {
            debug!("Treating malformed price bound {:?} as no constraint", raw);
            None
        }
    }
}

fn parse_category(raw: &str) -> Option<CategoryFilter> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<CarCategory>() {
        Ok(category) => Some(CategoryFilter::Is(category)),
        Err(e) => {
            debug!("{}; no listing will match", e);
            Some(CategoryFilter::Unknown(raw.to_string()))
        }
    }
}

/// Listings matching `criteria`, in their original order
pub fn filter(all: &[Car], criteria: &FilterCriteria) -> Vec<Car> {
    all.iter().filter(|car| criteria.matches(car)).cloned().collect()
}

/// Listings flagged for promotional placement, in their original order
pub fn featured(all: &[Car]) -> Vec<Car> {
    all.iter().filter(|car| car.featured()).cloned().collect()
}

/// Other listings in the same category as `car`, at most `limit` of them
pub fn related(all: &[Car], car: &Car, limit: usize) -> Vec<Car> {
    all.iter()
        .filter(|c| c.category == car.category && c.id != car.id)
        .take(limit)
        .cloned()
        .collect()
}

/// Listings posted by `user_id`
pub fn owned_by(all: &[Car], user_id: &str) -> Vec<Car> {
    all.iter().filter(|c| c.user_id == user_id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    fn ids(cars: &[Car]) -> Vec<&str> {
        cars.iter().map(|c| c.id.as_str()).collect()
    }

    fn scenario() -> Vec<Car> {
        fixtures::cars()
            .into_iter()
            .filter(|c| ["c1", "c2", "c4"].contains(&c.id.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let all = fixtures::cars();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_empty());
        assert_eq!(filter(&all, &criteria), all);
    }

    #[test]
    fn test_brand_matches_substring_in_any_case() {
        let all = fixtures::cars();

        for needle in ["bmw", "BMW", "bM", "m"] {
            let criteria = FilterCriteria {
                brand: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(ids(&filter(&all, &criteria)).contains(&"c2"), "needle {}", needle);
        }

        let criteria = FilterCriteria {
            brand: Some("benz".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &criteria)), vec!["c4"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let all = fixtures::cars();

        let exact = FilterCriteria {
            min_price: Some(48000.0),
            max_price: Some(48000.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &exact)), vec!["c1"]);

        let above = FilterCriteria {
            min_price: Some(60000.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &above)), vec!["c2", "c5"]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let all = fixtures::cars();
        let criteria = FilterCriteria {
            brand: Some("bmw".to_string()),
            max_price: Some(50000.0),
            ..Default::default()
        };

        assert!(filter(&all, &criteria).is_empty());
    }

    #[test]
    fn test_category_and_max_price_scenario() {
        let cars = scenario();

        let suv = FilterCriteria {
            category: Some(CarCategory::SUV.into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&cars, &suv)), vec!["c1"]);

        let cheap = FilterCriteria {
            max_price: Some(50000.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&cars, &cheap)), vec!["c1", "c4"]);
    }

    #[test]
    fn test_model_and_location_constraints() {
        let all = fixtures::cars();
        let criteria = FilterCriteria {
            location: Some("los angeles".to_string()),
            model: Some("9".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&filter(&all, &criteria)), vec!["c5"]);
    }

    #[test]
    fn test_from_pairs_drops_malformed_values() {
        let criteria = FilterCriteria::from_pairs([
            ("brand", ""),
            ("category", ""),
            ("minPrice", "cheap"),
            ("maxPrice", " 50000 "),
            ("sort", "price"),
        ]);

        assert_eq!(
            criteria,
            FilterCriteria {
                max_price: Some(50000.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_from_pairs_reads_all_keys() {
        let criteria = FilterCriteria::from_pairs(vec![
            ("brand".to_string(), "Tesla".to_string()),
            ("model".to_string(), "Y".to_string()),
            ("location".to_string(), "CA".to_string()),
            ("category".to_string(), "SUV".to_string()),
            ("minPrice".to_string(), "0".to_string()),
            ("maxPrice".to_string(), "1e5".to_string()),
        ]);

        assert_eq!(criteria.brand.as_deref(), Some("Tesla"));
        assert_eq!(criteria.category, Some(CategoryFilter::Is(CarCategory::SUV)));
        assert_eq!(criteria.min_price, Some(0.0));
        assert_eq!(criteria.max_price, Some(100000.0));
        assert_eq!(ids(&filter(&fixtures::cars(), &criteria)), vec!["c1"]);
    }

    #[test]
    fn test_unknown_or_miscased_category_matches_nothing() {
        let all = fixtures::cars();

        for raw in ["Van", "suv", "SUV "] {
            let criteria = FilterCriteria::from_pairs([("category", raw)]);

            assert_eq!(
                criteria.category,
                Some(CategoryFilter::Unknown(raw.to_string()))
            );
            assert!(!criteria.is_empty());
            assert!(filter(&all, &criteria).is_empty(), "category {:?}", raw);
        }
    }

    #[test]
    fn test_criteria_serialize_for_export() {
        let criteria = FilterCriteria::from_pairs([
            ("brand", "bmw"),
            ("category", "Coupe"),
            ("maxPrice", "70000"),
        ]);

        let value = serde_json::to_value(&criteria).unwrap();

        assert_eq!(value["brand"], "bmw");
        assert_eq!(value["category"], "Coupe");
        assert_eq!(value["maxPrice"], 70000.0);
        assert!(value["minPrice"].is_null());

        let unknown = FilterCriteria::from_pairs([("category", "Van")]);
        assert_eq!(serde_json::to_value(&unknown).unwrap()["category"], "Van");
    }

    #[test]
    fn test_featured_selection() {
        let all = fixtures::cars();
        assert_eq!(ids(&featured(&all)), vec!["c1", "c2", "c5"]);

        let plain: Vec<Car> = all.into_iter().filter(|c| !c.featured()).collect();
        assert!(featured(&plain).is_empty());
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let all = fixtures::cars();
        let tesla = all.iter().find(|c| c.id == "c1").unwrap().clone();

        assert_eq!(ids(&related(&all, &tesla, 3)), vec!["c3"]);
        assert!(related(&all, &tesla, 0).is_empty());
    }

    #[test]
    fn test_owned_by() {
        let all = fixtures::cars();
        assert_eq!(ids(&owned_by(&all, "u1")), vec!["c1", "c3"]);
        assert!(owned_by(&all, "nobody").is_empty());
    }
}
