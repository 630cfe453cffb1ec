mod config;
mod models;
mod services;

use anyhow::Context;
use config::Config;
use models::{filter, Car, CarCategory, NewCar, SellForm};
use services::{AuthService, CarStore, Latency, MockMarketplace, Registration, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_car(i: usize, car: &Car) {
    println!("{}. {} (${})", i + 1, car.title, car.price);
    println!("   {} {} · {} · {} mi", car.brand, car.model, car.category, car.mileage);
    println!("   Location: {}", car.location);
    println!("   ID: {}", car.id);
    if !car.features.is_empty() {
        println!("   Features: {}", car.features.join(", "));
    }
    if let Some(image) = car.primary_image() {
        println!("   Image: {}", image);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Car Market - mock marketplace");
    info!("================================");

    let config = Config::from_env().context("Failed to load configuration")?;
    let latency = if config.simulate_latency {
        Latency::default()
    } else {
        Latency::none()
    };

    let store = MockMarketplace::new(latency);

    // Featured listings for the landing page
    let featured = store.get_featured().await;
    info!("⭐ {} featured listings", featured.len());
    for car in &featured {
        info!("   {} ({})", car.title, car.id);
    }

    // Browse with the configured criteria
    let all = store.get_all().await;
    let matches = filter::filter(&all, &config.criteria);
    if config.criteria.is_empty() {
        info!("No filter criteria set, showing all {} listings", all.len());
    } else {
        info!("Filter {:?} matched {} of {} listings", config.criteria, matches.len(), all.len());
    }
    if matches.is_empty() {
        warn!("No cars found matching the criteria");
    }

    println!();
    for (i, car) in matches.iter().enumerate() {
        print_car(i, car);
    }

    // Detail view with related cars for the first hit
    if let Some(first) = matches.first() {
        if let Some(car) = store.get_by_id(&first.id).await {
            let related = filter::related(&all, &car, 3);
            info!("🔎 {} has {} related listings", car.title, related.len());
        }
    }

    // Register and post a listing as the demo user
    let mut session = Session::new(store.clone(), latency.register);
    let demo = store.get_user().await;
    let registration = Registration {
        email: demo.email.clone(),
        first_name: demo.first_name.clone().unwrap_or_default(),
        last_name: demo.last_name.clone().unwrap_or_default(),
        mobile: demo.mobile.clone().unwrap_or_default(),
    };
    session
        .register(registration)
        .await
        .context("Demo registration failed")?;
    let owner = session.user().cloned().context("No signed-in user")?;

    let form = SellForm {
        title: "2018 Volkswagen Golf GTI".to_string(),
        price: "24500".to_string(),
        brand: "Volkswagen".to_string(),
        model: "Golf GTI".to_string(),
        year: 2018,
        mileage: "41000".to_string(),
        location: "Seattle, WA".to_string(),
        description: "Well maintained hot hatch with service history.".to_string(),
        category: CarCategory::Hatchback,
        ..SellForm::default()
    };
    let created = store.create(NewCar::from_form(&owner, form)).await;
    info!("📝 Posted {} as {}", created.id, owner.username);

    session.logout().await;

    // Come back later and check the dashboard
    session
        .login(&demo.email, "demo")
        .await
        .context("Demo sign-in failed")?;
    let mine = filter::owned_by(&store.get_all().await, &owner.id);
    info!("📋 {} has {} listings", owner.username, mine.len());

    session.logout().await;
    if !session.is_authenticated() {
        info!("👋 Session closed");
    }

    // Save the applied criteria and matches to the export file
    let export = serde_json::json!({
        "criteria": &config.criteria,
        "listings": &matches,
    });
    let json = serde_json::to_string_pretty(&export)?;
    if let Some(parent) = config.export_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&config.export_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.export_path.display()))?;
    info!("💾 Saved {} listings to {}", matches.len(), config.export_path.display());

    Ok(())
}
