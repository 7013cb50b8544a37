//! Tests for the in-memory store behind the data services.

use evebuddy::{
    app::service::{CharacterService, EveUniverseService},
    model::{CharacterSection, RouteHeader, RoutePreference, SolarSystemId},
};

use super::*;

/// Tests that failed sections are reported by the status cache.
///
/// Expected: one error in the summary of the character
#[tokio::test]
async fn reports_failed_sections() {
    let test = TestBuilder::new()
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .with_failed_section(1001, CharacterSection::Assets, "ESI unavailable")
        .build()
        .await
        .expect("Failed to create test setup");

    let summary = test
        .ctx
        .status
        .character_section_summary(factory::character_id(1001));

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.total, CharacterSection::ALL.len());
}

/// Tests that assets are kept per character.
///
/// Expected: each character only sees its own assets
#[tokio::test]
async fn lists_assets_per_character() {
    let bruce = factory::character_id(1001);
    let clark = factory::character_id(1002);
    let test = TestBuilder::new()
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .with_character(factory::mock_character(1002, "Clark Kent"))
        .with_asset(factory::mock_asset(bruce, 1, 60003760, "Hangar", 10))
        .with_asset(factory::mock_asset(bruce, 2, 60003760, "Hangar", 20))
        .with_asset(factory::mock_asset(clark, 3, 60003760, "Hangar", 30))
        .build()
        .await
        .expect("Failed to create test setup");

    let assets = test.store.list_assets(bruce).await.unwrap();
    assert_eq!(assets.len(), 2);
    let assets = test.store.list_assets(clark).await.unwrap();
    assert_eq!(assets.len(), 1);
    let assets = test
        .store
        .list_assets(factory::character_id(42))
        .await
        .unwrap();
    assert!(assets.is_empty());
}

/// Tests that routes are computed over stargates in both directions.
///
/// Expected: route from the end of the gate back to its start
#[tokio::test]
async fn routes_over_stargates_both_ways() {
    let test = TestBuilder::new()
        .with_solar_system(factory::mock_solar_system(1, "Jita", 0.95, "The Forge"))
        .with_solar_system(factory::mock_solar_system(2, "Perimeter", 0.95, "The Forge"))
        .with_stargate(1, 2)
        .build()
        .await
        .expect("Failed to create test setup");
    let header = RouteHeader {
        origin: SolarSystemId(2),
        destination: SolarSystemId(1),
        preference: RoutePreference::Shortest,
    };

    let routes = test.store.fetch_routes(vec![header]).await.unwrap();

    let names: Vec<_> = routes[&header].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Perimeter", "Jita"]);
}

/// Tests switching to an unknown character.
///
/// Expected: not found error, current character unchanged
#[tokio::test]
async fn switching_to_unknown_character_fails() {
    let test = TestBuilder::new()
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .with_current_character(1001)
        .build()
        .await
        .expect("Failed to create test setup");

    let err = test
        .ctx
        .switch_character(factory::character_id(42))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(test.ctx.current_character_id(), Some(factory::character_id(1001)));
}
