//! Factories for domain entities with default test values.

use std::collections::BTreeSet;

use evebuddy::model::{
    universe::{EVE_CATEGORY_SHIP, EVE_GROUP_CARGO_CONTAINER},
    Character, CharacterAsset, CharacterId, CharacterShort, EveCategory, EveGroup, EveLocation,
    EveSolarSystem, EveType, ItemId, JumpClone, LocationId, LocationType, SolarSystemId,
};

/// Character ID used by tests which need only one character.
pub const CHARACTER_ID: i32 = 2114794365;

/// Create a character ID, panicking on zero.
pub fn character_id(id: i32) -> CharacterId {
    CharacterId::new(id).expect("character ID must not be zero")
}

/// Create a mock character without location or ship.
///
/// # Arguments
/// - `id` - The EVE Online character ID
/// - `name` - Name of the character
///
/// # Returns
/// - `Character` - A character with test data
pub fn mock_character(id: i32, name: &str) -> Character {
    Character {
        id: character_id(id),
        name: name.to_string(),
        corporation_name: "Autumn Order".to_string(),
        location: None,
        ship: None,
        last_clone_jump_at: None,
        infomorph_synchronizing: 0,
        tags: BTreeSet::new(),
    }
}

/// Create a mock solar system in the given region.
pub fn mock_solar_system(
    id: i32,
    name: &str,
    security_status: f32,
    region: &str,
) -> EveSolarSystem {
    EveSolarSystem {
        id: SolarSystemId(id),
        name: name.to_string(),
        security_status,
        constellation_name: "Kimotoro".to_string(),
        region_name: region.to_string(),
    }
}

/// Create a mock station located in a solar system.
///
/// # Arguments
/// - `id` - The location ID
/// - `name` - Name of the station
/// - `system` - Solar system of the station, `None` for an unknown location
///
/// # Returns
/// - `EveLocation` - A location with test data
pub fn mock_location(id: i64, name: &str, system: Option<EveSolarSystem>) -> EveLocation {
    EveLocation {
        id: LocationId(id),
        name: name.to_string(),
        solar_system: system,
        type_name: Some("Station".to_string()),
    }
}

fn mock_type(id: i32, name: &str, group_id: i32, category_id: i32) -> EveType {
    EveType {
        id,
        name: name.to_string(),
        group: EveGroup {
            id: group_id,
            name: "Group".to_string(),
            category: EveCategory {
                id: category_id,
                name: "Category".to_string(),
            },
        },
    }
}

/// Create a stack of items.
///
/// # Arguments
/// - `character_id` - Owner of the asset
/// - `item_id` - The item ID
/// - `location_id` - Location or item ID the asset is stored in
/// - `flag` - ESI location flag, e.g. "Hangar" or "Cargo"
/// - `quantity` - Size of the stack
///
/// # Returns
/// - `CharacterAsset` - An asset of type "Tritanium"
pub fn mock_asset(
    character_id: CharacterId,
    item_id: i64,
    location_id: i64,
    flag: &str,
    quantity: i32,
) -> CharacterAsset {
    let location_flag = match flag.parse() {
        Ok(flag) => flag,
        Err(never) => match never {},
    };
    CharacterAsset {
        character_id,
        item_id: ItemId(item_id),
        eve_type: Some(mock_type(34, "Tritanium", 18, 4)),
        is_blueprint_copy: false,
        is_singleton: false,
        location_flag,
        location_id: LocationId(location_id),
        location_type: LocationType::Item,
        name: None,
        price: Some(4.5),
        quantity,
    }
}

/// Create an assembled ship in the hangar of a station.
pub fn mock_ship(
    character_id: CharacterId,
    item_id: i64,
    station_id: i64,
    name: &str,
) -> CharacterAsset {
    let mut asset = mock_asset(character_id, item_id, station_id, "Hangar", 1);
    asset.eve_type = Some(mock_type(603, name, 25, EVE_CATEGORY_SHIP));
    asset.is_singleton = true;
    asset.location_type = LocationType::Station;
    asset.price = Some(400_000.0);
    asset
}

/// Create an assembled cargo container in the hangar of a station.
pub fn mock_container(character_id: CharacterId, item_id: i64, station_id: i64) -> CharacterAsset {
    let mut asset = mock_asset(character_id, item_id, station_id, "Hangar", 1);
    asset.eve_type = Some(mock_type(
        3293,
        "Medium Standard Container",
        EVE_GROUP_CARGO_CONTAINER,
        2,
    ));
    asset.is_singleton = true;
    asset.location_type = LocationType::Station;
    asset.price = None;
    asset
}

/// Create a jump clone without implants.
pub fn mock_jump_clone(clone_id: i64, owner: &Character, location: EveLocation) -> JumpClone {
    JumpClone {
        clone_id,
        character: CharacterShort::from(owner),
        location,
        implants: Vec::new(),
    }
}
