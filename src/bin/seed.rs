use bookit_backend::config::Config;
use bookit_backend::domain::models::experience::{Experience, NewExperienceParams};
use bookit_backend::domain::models::promo_code::{PromoCode, PROMO_KIND_FLAT, PROMO_KIND_PERCENTAGE};
use bookit_backend::domain::models::slot::Slot;
use bookit_backend::infra::factory::bootstrap_state;
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::{info, warn};

struct ExperienceSeed {
    title: &'static str,
    description: &'static str,
    location: &'static str,
    category: &'static str,
    price: f64,
    duration: &'static str,
    image: &'static str,
    rating: f64,
    review_count: i64,
    highlights: [&'static str; 5],
    included: [&'static str; 5],
}

const EXPERIENCES: [ExperienceSeed; 6] = [
    ExperienceSeed {
        title: "Sunset Desert Safari",
        description: "Experience the magic of the Arabian desert at sunset. Enjoy dune bashing, camel riding, and a traditional BBQ dinner under the stars.",
        location: "Dubai Desert Conservation Reserve",
        category: "Adventure",
        price: 299.0,
        duration: "6 hours",
        image: "https://images.unsplash.com/photo-1473496169904-658ba7c44d8a?w=800",
        rating: 4.8,
        review_count: 234,
        highlights: ["Professional 4x4 dune bashing", "Camel riding experience", "Traditional BBQ dinner", "Live entertainment", "Henna painting"],
        included: ["Hotel pickup and drop-off", "Professional guide", "All activities", "Dinner and refreshments", "Safety equipment"],
    },
    ExperienceSeed {
        title: "Scuba Diving Adventure",
        description: "Dive into crystal clear waters and explore vibrant coral reefs teeming with marine life. Perfect for beginners and experienced divers.",
        location: "Fujairah Coast",
        category: "Water Sports",
        price: 450.0,
        duration: "4 hours",
        image: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800",
        rating: 4.9,
        review_count: 189,
        highlights: ["PADI certified instructors", "All equipment provided", "Underwater photography", "Marine life spotting", "Beginner friendly"],
        included: ["Full diving equipment", "Professional instructor", "Underwater photos", "Light refreshments", "Insurance coverage"],
    },
    ExperienceSeed {
        title: "Hot Air Balloon Ride",
        description: "Soar above the desert landscape at sunrise. Witness breathtaking views and spot wildlife from a unique perspective.",
        location: "Al Ain Desert",
        category: "Aerial",
        price: 899.0,
        duration: "4 hours",
        image: "https://images.unsplash.com/photo-1498550744921-75f79806b163?w=800",
        rating: 5.0,
        review_count: 156,
        highlights: ["Sunrise flight experience", "Wildlife spotting", "Champagne breakfast", "Flight certificate", "Small group sizes"],
        included: ["Hotel transfers", "Pre-flight refreshments", "1-hour balloon ride", "Gourmet breakfast", "Flight certificate"],
    },
    ExperienceSeed {
        title: "Mountain Hiking Expedition",
        description: "Trek through stunning mountain trails with experienced guides. Discover hidden wadis and enjoy panoramic views.",
        location: "Hatta Mountains",
        category: "Hiking",
        price: 199.0,
        duration: "5 hours",
        image: "https://images.unsplash.com/photo-1551632811-561732d1e306?w=800",
        rating: 4.7,
        review_count: 298,
        highlights: ["Scenic mountain trails", "Hidden wadis exploration", "Professional mountain guide", "Photo opportunities", "All fitness levels"],
        included: ["Expert guide", "Hiking equipment", "Water and snacks", "First aid kit", "Transportation"],
    },
    ExperienceSeed {
        title: "Luxury Yacht Cruise",
        description: "Sail along the stunning coastline on a private yacht. Enjoy swimming, snorkeling, and a delicious lunch onboard.",
        location: "Dubai Marina",
        category: "Water",
        price: 1299.0,
        duration: "8 hours",
        image: "https://images.unsplash.com/photo-1567899378494-47b22a2ae96a?w=800",
        rating: 4.9,
        review_count: 87,
        highlights: ["Private yacht charter", "Swimming and snorkeling", "Gourmet lunch", "Scenic coastline views", "Luxury amenities"],
        included: ["Private yacht", "Professional crew", "Lunch and beverages", "Snorkeling equipment", "Towels and amenities"],
    },
    ExperienceSeed {
        title: "Cultural Heritage Tour",
        description: "Explore historic sites, traditional markets, and museums. Learn about rich cultural heritage with an expert guide.",
        location: "Old Dubai",
        category: "Cultural",
        price: 149.0,
        duration: "3 hours",
        image: "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?w=800",
        rating: 4.6,
        review_count: 412,
        highlights: ["Historic Al Fahidi district", "Traditional souks", "Museum visits", "Expert historian guide", "Cultural insights"],
        included: ["Expert guide", "All entrance fees", "Traditional refreshments", "Hotel pickup", "Small group tour"],
    },
];

// Categories that also get a premium-priced evening slot.
const EVENING_CATEGORIES: [&str; 3] = ["Adventure", "Cultural", "Water"];

// Small randomized head start on the booked counter, like a live catalog.
fn initial_booked(max_exclusive: i64) -> i64 {
    rand::thread_rng().gen_range(0..max_exclusive)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    info!("🌱 Seeding database...");

    let existing = state.experience_repo.count().await.expect("Failed to query catalog");
    if existing > 0 {
        warn!("Catalog already has {} experiences, refusing to reseed", existing);
        return;
    }

    let promos = [
        PromoCode::new("SAVE10", PROMO_KIND_PERCENTAGE, 10.0, 100.0, None, None),
        PromoCode::new("FLAT100", PROMO_KIND_FLAT, 100.0, 500.0, None, None),
        PromoCode::new("WELCOME20", PROMO_KIND_PERCENTAGE, 20.0, 200.0, Some(500.0), None),
    ];
    for promo in &promos {
        state.promo_repo.create(promo).await.expect("Failed to create promo code");
    }
    info!("✅ Created {} promo codes", promos.len());

    let today = Utc::now().date_naive();

    for seed in &EXPERIENCES {
        let experience = state.experience_repo.create(&Experience::new(NewExperienceParams {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            location: seed.location.to_string(),
            category: seed.category.to_string(),
            price: seed.price,
            duration: seed.duration.to_string(),
            image: seed.image.to_string(),
            rating: seed.rating,
            review_count: seed.review_count,
            highlights: seed.highlights.iter().map(|s| s.to_string()).collect(),
            included: seed.included.iter().map(|s| s.to_string()).collect(),
        })).await.expect("Failed to create experience");

        let mut slot_count = 0;
        for day in 0..14 {
            let date = today + Duration::days(day);

            let morning = Slot::new(experience.id.clone(), date, "08:00", "12:00", 10, initial_booked(3), experience.price);
            state.slot_repo.create(&morning).await.expect("Failed to create slot");

            let afternoon = Slot::new(experience.id.clone(), date, "14:00", "18:00", 10, initial_booked(5), experience.price);
            state.slot_repo.create(&afternoon).await.expect("Failed to create slot");
            slot_count += 2;

            if EVENING_CATEGORIES.contains(&experience.category.as_str()) {
                let evening = Slot::new(experience.id.clone(), date, "18:00", "22:00", 8, initial_booked(4), experience.price * 1.2);
                state.slot_repo.create(&evening).await.expect("Failed to create slot");
                slot_count += 1;
            }
        }

        info!("✅ Created experience: {} with {} slots", experience.title, slot_count);
    }

    info!("✨ Database seeded successfully!");
}
