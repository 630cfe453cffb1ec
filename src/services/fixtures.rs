use crate::models::{Car, CarCategory, FuelType, Transmission, User};
use chrono::{DateTime, TimeZone, Utc};

/// Identifier that always fails to sign in
pub const INVALID_LOGIN: &str = "error@test.com";

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("fixture timestamps are valid")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The single demo account
pub fn default_user() -> User {
    User {
        id: "u1".to_string(),
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        mobile: Some("+1 555 0199".to_string()),
        avatar_url: Some("https://picsum.photos/id/64/200/200".to_string()),
    }
}

/// Seed listings loaded into every new store
pub fn cars() -> Vec<Car> {
    vec![
        Car {
            id: "c1".to_string(),
            user_id: "u1".to_string(),
            title: "2023 Tesla Model Y Long Range".to_string(),
            brand: "Tesla".to_string(),
            model: "Model Y".to_string(),
            year: 2023,
            price: 48_000,
            mileage: 12_000,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            category: CarCategory::SUV,
            location: "Los Angeles, CA".to_string(),
            description: "Pristine condition Tesla Model Y. Single owner, always garaged. Includes Full Self-Driving capability.".to_string(),
            features: strings(&["Autopilot", "Heated Seats", "Panoramic Roof", "Navigation", "Bluetooth"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1619682817481-e994891cd1f5?auto=format&fit=crop&q=80&w=1600",
                "https://images.unsplash.com/photo-1617788138017-80ad40651399?auto=format&fit=crop&q=80&w=1600",
                "https://images.unsplash.com/photo-1560958089-b8a1929cea89?auto=format&fit=crop&q=80&w=1600",
            ]),
            created_at: at(2023, 10, 15, 10, 0),
            is_featured: Some(true),
        },
        Car {
            id: "c2".to_string(),
            user_id: "u2".to_string(),
            title: "2020 BMW M4 Competition".to_string(),
            brand: "BMW".to_string(),
            model: "M4".to_string(),
            year: 2020,
            price: 62_000,
            mileage: 25_000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            category: CarCategory::Coupe,
            location: "Miami, FL".to_string(),
            description: "A beast on the road. M Competition package with carbon fiber roof and interior trim.".to_string(),
            features: strings(&["Leather Seats", "Harman Kardon Sound", "Head-up Display", "Carbon Fiber Package"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1617531653332-bd46c24f2068?auto=format&fit=crop&q=80&w=1600",
                "https://images.unsplash.com/photo-1555215696-99ac45e43d34?auto=format&fit=crop&q=80&w=1600",
            ]),
            created_at: at(2023, 11, 1, 14, 30),
            is_featured: Some(true),
        },
        Car {
            id: "c3".to_string(),
            user_id: "u1".to_string(),
            title: "2022 Ford Bronco Wildtrak".to_string(),
            brand: "Ford".to_string(),
            model: "Bronco".to_string(),
            year: 2022,
            price: 55_000,
            mileage: 8_000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            category: CarCategory::SUV,
            location: "Denver, CO".to_string(),
            description: "Ready for off-road adventures. Sasquatch package included.".to_string(),
            features: strings(&["4x4", "Removable Roof", "Apple CarPlay", "Tow Package"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1652533748637-7c1e4b53f366?auto=format&fit=crop&q=80&w=1600",
                "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&q=80&w=1600",
            ]),
            created_at: at(2023, 11, 5, 9, 0),
            is_featured: None,
        },
        Car {
            id: "c4".to_string(),
            user_id: "u3".to_string(),
            title: "2021 Mercedes-Benz C-Class".to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "C300".to_string(),
            year: 2021,
            price: 42_000,
            mileage: 18_000,
            fuel_type: FuelType::Hybrid,
            transmission: Transmission::Automatic,
            category: CarCategory::Sedan,
            location: "New York, NY".to_string(),
            description: "Luxury daily driver with excellent fuel economy.".to_string(),
            features: strings(&["Sunroof", "Burmester Audio", "Ambient Lighting", "Keyless Go"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?auto=format&fit=crop&q=80&w=1600",
            ]),
            created_at: at(2023, 11, 8, 11, 20),
            is_featured: None,
        },
        Car {
            id: "c5".to_string(),
            user_id: "u3".to_string(),
            title: "2019 Porsche 911 Carrera S".to_string(),
            brand: "Porsche".to_string(),
            model: "911".to_string(),
            year: 2019,
            price: 115_000,
            mileage: 12_000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            category: CarCategory::Coupe,
            location: "Los Angeles, CA".to_string(),
            description: "Timeless design and performance. Sport Chrono package.".to_string(),
            features: strings(&["Sport Exhaust", "Bose Sound", "18-way Seats", "PDLS+"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1503376763036-066120622c74?auto=format&fit=crop&q=80&w=1600",
            ]),
            created_at: at(2023, 11, 10, 16, 45),
            is_featured: Some(true),
        },
    ]
}
