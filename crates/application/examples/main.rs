use application::DirectoryApp;
use domain::{Amenity, City, Country, Entity, Place, Review, User};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏠 HBnB directory walkthrough");

    let app = DirectoryApp::in_memory();

    let mut country = Country::new("France".to_string(), "FR".to_string());
    app.country_service.save(&mut country).await?;

    let mut city = City::new(
        "Paris".to_string(),
        country.code.clone(),
        Some("Capital city".to_string()),
    );
    app.city_service.save(&mut city).await?;

    let mut host = User::new(
        "host@example.com".to_string(),
        "Marie".to_string(),
        "Curie".to_string(),
        Some("secret".to_string()),
    );
    app.user_service.save(&mut host).await?;

    let mut place = Place::new(
        "Montmartre loft".to_string(),
        "Top floor with a view".to_string(),
        "12 Rue Lepic".to_string(),
        city.id().to_string(),
        48.8867,
        2.3333,
        host.id().to_string(),
        2,
        1,
        140.0,
        4,
    );
    app.place_service.save(&mut place).await?;

    let mut wifi = Amenity::new("Wifi".to_string());
    app.amenity_service.save(&mut wifi).await?;

    let mut review = Review::new(
        host.id().to_string(),
        place.id().to_string(),
        5,
        "Lovely stay".to_string(),
    );
    app.review_service.save(&mut review).await?;
    println!("💾 Saved one record of each kind");

    // The same email cannot be registered twice.
    let mut copycat = User::new(
        "host@example.com".to_string(),
        "Pierre".to_string(),
        "Curie".to_string(),
        None,
    );
    if let Err(e) = app.user_service.save(&mut copycat).await {
        println!("🚫 Rejected second user: {}", e);
    }

    wifi.name = "Fibre wifi".to_string();
    app.amenity_service.save(&mut wifi).await?;
    let reloaded = app.amenity_service.require(wifi.id()).await?;
    println!("✏️  Amenity renamed to {}", reloaded.name);

    app.review_service.delete(&review).await?;
    println!(
        "🗑️  Review deleted, still stored: {}",
        app.review_service.get(review.id()).await?.is_some()
    );

    println!();
    println!("📊 Places:");
    for place in app.place_service.get_all().await? {
        println!("   • {} ({} guests, {:.2}/night)", place.name, place.max_guests, place.price_per_night);
    }

    println!();
    println!("🏁 Demo complete!");
    Ok(())
}
