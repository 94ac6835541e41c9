//! Test-only place fixtures shared by unit, behaviour and property tests.

use crate::{PlaceFeature, PlaceRecord};

/// Build a classified place with a modest default rating.
///
/// # Panics
/// Panics when the coordinates are invalid; fixtures are expected to be
/// well formed.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast")]
pub fn place(id: &str, name: &str, category: &str, latitude: f64, longitude: f64) -> PlaceFeature {
    PlaceFeature::try_from(
        PlaceRecord::new(id, name, latitude, longitude)
            .with_category(category)
            .with_rating(4.0, 10),
    )
    .expect("fixture place should be valid")
}

/// Build a place from a fully specified record.
///
/// # Panics
/// Panics when the record fails validation.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast")]
pub fn place_from(record: PlaceRecord) -> PlaceFeature {
    PlaceFeature::try_from(record).expect("fixture record should be valid")
}

/// A small catalogue along Sri Lanka's south-west coast.
///
/// Places are listed north to south starting in Colombo so distance-based
/// expectations stay readable.
#[must_use]
pub fn southern_coast() -> Vec<PlaceFeature> {
    vec![
        place_from(
            PlaceRecord::new("colombo-museum", "Colombo National Museum", 6.910, 79.861)
                .with_category("museum")
                .with_tags(["history", "culture"])
                .with_rating(4.5, 9_000)
                .with_description("Artefacts gathered from across the island"),
        ),
        place_from(
            PlaceRecord::new("pettah-market", "Pettah Market", 6.936, 79.851)
                .with_category("market")
                .with_tags(["shopping", "street food"])
                .with_rating(4.0, 3_200),
        ),
        place_from(
            PlaceRecord::new("hikkaduwa-beach", "Hikkaduwa Beach", 6.139, 80.101)
                .with_category("beach")
                .with_tags(["surf", "coral", "snorkeling"])
                .with_rating(4.6, 7_400)
                .with_description("Reef beach known for surf breaks"),
        ),
        place_from(
            PlaceRecord::new("galle-fort", "Galle Fort", 6.026, 80.217)
                .with_category("historic site")
                .with_tags(["unesco", "history", "walls"])
                .with_rating(4.8, 21_000)
                .with_description("Dutch fort overlooking the ocean"),
        ),
        place_from(
            PlaceRecord::new("unawatuna-beach", "Unawatuna Beach", 6.009, 80.249)
                .with_category("beach")
                .with_tags(["swimming", "surf"])
                .with_rating(4.4, 5_100),
        ),
        place_from(
            PlaceRecord::new("mirissa-cafe", "Mirissa Coffee House", 5.948, 80.457)
                .with_category("cafe")
                .with_tags(["coffee", "breakfast"])
                .with_rating(4.2, 430),
        ),
    ]
}
