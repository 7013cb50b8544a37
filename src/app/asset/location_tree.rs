//! Typed location tree shown next to the asset grid.
//!
//! Every location with assets becomes a root. Below each location the assets are grouped
//! into hangars, ship bays, containers, asset safety wraps and items in space:
//!
//! ```text
//! Location
//! ├── Ship Hangar
//! │   └── Ship
//! │       ├── Fitting / Cargo Bay / Drone Bay / Fuel Bay
//! │       └── Frigate Escape Bay / Fighter Bay / Other
//! ├── Item Hangar
//! │   └── Container
//! ├── Asset Safety
//! └── In Space
//! ```

use std::fmt;

use crate::{
    app::{
        asset::collection::{AssetCollection, NodeId},
        error::tree::TreeError,
        tree::{TreeData, TreeNode},
    },
    model::{
        CharacterAsset, CharacterId, ItemId, LocationId, ShipBay, SolarSystemSecurityType,
        TopLevelPlacement,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationNodeVariant {
    Location,
    ShipHangar,
    ItemHangar,
    Container,
    Ship,
    CargoBay,
    FuelBay,
    DroneBay,
    Fitting,
    FrigateEscapeBay,
    FighterBay,
    ShipOther,
    AssetSafety,
    InSpace,
}

impl LocationNodeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::ShipHangar => "ship_hangar",
            Self::ItemHangar => "item_hangar",
            Self::Container => "container",
            Self::Ship => "ship",
            Self::CargoBay => "cargo_bay",
            Self::FuelBay => "fuel_bay",
            Self::DroneBay => "drone_bay",
            Self::Fitting => "fitting",
            Self::FrigateEscapeBay => "frigate_escape_bay",
            Self::FighterBay => "fighter_bay",
            Self::ShipOther => "ship_other",
            Self::AssetSafety => "asset_safety",
            Self::InSpace => "in_space",
        }
    }

    /// Reports whether nodes of this variant stand for a single item or location,
    /// which the asset grid can navigate to.
    pub fn is_container_like(self) -> bool {
        matches!(self, Self::Location | Self::Ship | Self::Container)
    }

    fn for_bay(bay: ShipBay) -> (Self, &'static str) {
        match bay {
            ShipBay::Cargo => (Self::CargoBay, "Cargo Bay"),
            ShipBay::Drone => (Self::DroneBay, "Drone Bay"),
            ShipBay::FrigateEscape => (Self::FrigateEscapeBay, "Frigate Escape Bay"),
            ShipBay::Fuel => (Self::FuelBay, "Fuel Bay"),
            ShipBay::Fighter => (Self::FighterBay, "Fighter Bay"),
            ShipBay::Fitting => (Self::Fitting, "Fitting"),
            ShipBay::Other => (Self::ShipOther, "Other"),
        }
    }

    fn bay(self) -> Option<ShipBay> {
        match self {
            Self::CargoBay => Some(ShipBay::Cargo),
            Self::DroneBay => Some(ShipBay::Drone),
            Self::FrigateEscapeBay => Some(ShipBay::FrigateEscape),
            Self::FuelBay => Some(ShipBay::Fuel),
            Self::FighterBay => Some(ShipBay::Fighter),
            Self::Fitting => Some(ShipBay::Fitting),
            Self::ShipOther => Some(ShipBay::Other),
            _ => None,
        }
    }
}

/// Unique ID of a node in the location tree.
///
/// The container ID alone is not unique, since a location and its hangars or a ship and its
/// bays share the same container ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationNodeUid {
    pub character_id: CharacterId,
    pub container_id: i64,
    pub variant: LocationNodeVariant,
}

impl fmt::Display for LocationNodeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.character_id,
            self.container_id,
            self.variant.as_str()
        )
    }
}

/// A node in the location tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationNode {
    pub character_id: CharacterId,
    /// ID of the location or item this node refers to.
    pub container_id: i64,
    pub variant: LocationNodeVariant,
    pub name: String,
    pub item_count: i64,
    /// Set for locations without a known solar system.
    pub is_unknown: bool,
    pub system_name: Option<String>,
    pub security_value: Option<f32>,
    pub security_type: Option<SolarSystemSecurityType>,
}

impl LocationNode {
    fn new(
        character_id: CharacterId,
        container_id: i64,
        variant: LocationNodeVariant,
        name: impl Into<String>,
        item_count: i64,
    ) -> Self {
        Self {
            character_id,
            container_id,
            variant,
            name: name.into(),
            item_count,
            is_unknown: false,
            system_name: None,
            security_value: None,
            security_type: None,
        }
    }

    pub fn uid(&self) -> LocationNodeUid {
        LocationNodeUid {
            character_id: self.character_id,
            container_id: self.container_id,
            variant: self.variant,
        }
    }

    /// Security status with one decimal, or "?" for unknown locations.
    pub fn security_display(&self) -> String {
        match self.security_value {
            Some(value) if !self.is_unknown => format!("{:.1}", value),
            _ => "?".to_string(),
        }
    }
}

impl TreeNode for LocationNode {
    type Uid = LocationNodeUid;

    fn uid(&self) -> Self::Uid {
        LocationNode::uid(self)
    }
}

/// Builds the location tree for one character from its asset collection.
///
/// # Arguments
/// - `collection` - Asset collection of the character
/// - `character_id` - Character the tree belongs to, part of every node UID
///
/// # Returns
/// - `Ok(TreeData)` - Locations sorted by name, each with its hangars and bays
/// - `Err(TreeError)` - A node was added twice or below a missing parent
pub fn build_location_tree(
    collection: &AssetCollection,
    character_id: CharacterId,
) -> Result<TreeData<LocationNode>, TreeError> {
    let mut tree = TreeData::new();

    let mut locations: Vec<_> = collection
        .location_nodes()
        .iter()
        .filter_map(|id| Some((*id, collection.get(*id)?.location()?)))
        .collect();
    locations.sort_by_key(|(_, l)| l.display_name());

    for (location_id, location) in locations {
        let container_id = location.id.0;
        let mut node = LocationNode::new(
            character_id,
            container_id,
            LocationNodeVariant::Location,
            location.display_name(),
            collection.item_count_filtered(location_id),
        );
        match &location.solar_system {
            Some(system) => {
                node.system_name = Some(system.name.clone());
                node.security_value = Some(system.security_status);
                node.security_type = Some(system.security_type());
            }
            None => node.is_unknown = true,
        }
        let location_uid = tree.add(None, node)?;

        let top = partition_top_level(collection, location_id);

        let ship_count = top
            .ships
            .iter()
            .map(|(id, _)| collection.item_count_filtered(*id))
            .sum();
        let ships_uid = tree.add(
            Some(&location_uid),
            LocationNode::new(
                character_id,
                container_id,
                LocationNodeVariant::ShipHangar,
                "Ship Hangar",
                ship_count,
            ),
        )?;
        for (ship_id, ship) in &top.ships {
            add_ship(&mut tree, collection, &ships_uid, *ship_id, ship)?;
        }

        let item_count = top
            .items
            .iter()
            .chain(top.containers.iter())
            .map(|(id, _)| collection.item_count_any(*id))
            .sum();
        let items_uid = tree.add(
            Some(&location_uid),
            LocationNode::new(
                character_id,
                container_id,
                LocationNodeVariant::ItemHangar,
                "Item Hangar",
                item_count,
            ),
        )?;
        for (id, container) in &top.containers {
            tree.add(
                Some(&items_uid),
                LocationNode::new(
                    character_id,
                    container.item_id.0,
                    LocationNodeVariant::Container,
                    container.display_name(),
                    collection.item_count_any(*id) - 1,
                ),
            )?;
        }

        for (id, wrap) in &top.asset_safety {
            tree.add(
                Some(&location_uid),
                LocationNode::new(
                    character_id,
                    wrap.item_id.0,
                    LocationNodeVariant::AssetSafety,
                    "Asset Safety",
                    collection.item_count_any(*id) - 1,
                ),
            )?;
        }

        if !top.in_space.is_empty() {
            tree.add(
                Some(&location_uid),
                LocationNode::new(
                    character_id,
                    container_id,
                    LocationNodeVariant::InSpace,
                    "In Space",
                    top.in_space.len() as i64,
                ),
            )?;
        }
    }

    Ok(tree)
}

fn add_ship(
    tree: &mut TreeData<LocationNode>,
    collection: &AssetCollection,
    parent: &LocationNodeUid,
    ship_id: NodeId,
    ship: &CharacterAsset,
) -> Result<(), TreeError> {
    let character_id = ship.character_id;
    let ship_uid = tree.add(
        Some(parent),
        LocationNode::new(
            character_id,
            ship.item_id.0,
            LocationNodeVariant::Ship,
            ship.display_name_with_type(),
            collection.item_count_any(ship_id) - 1,
        ),
    )?;

    let mut counts: [Option<i64>; 7] = [None; 7];
    for child in collection.children(ship_id) {
        let Some(asset) = collection.get(*child).and_then(|n| n.asset()) else {
            continue;
        };
        let slot = &mut counts[bay_index(asset.ship_bay())];
        *slot = Some(slot.unwrap_or(0) + collection.item_count_any(*child));
    }

    for bay in [
        ShipBay::Fitting,
        ShipBay::Cargo,
        ShipBay::FrigateEscape,
        ShipBay::Drone,
        ShipBay::Fuel,
        ShipBay::Fighter,
        ShipBay::Other,
    ] {
        let count = counts[bay_index(bay)];
        if count.is_none() && bay != ShipBay::Cargo {
            continue;
        }
        let (variant, name) = LocationNodeVariant::for_bay(bay);
        tree.add(
            Some(&ship_uid),
            LocationNode::new(
                character_id,
                ship.item_id.0,
                variant,
                name,
                count.unwrap_or(0),
            ),
        )?;
    }
    Ok(())
}

fn bay_index(bay: ShipBay) -> usize {
    match bay {
        ShipBay::Cargo => 0,
        ShipBay::Drone => 1,
        ShipBay::FrigateEscape => 2,
        ShipBay::Fuel => 3,
        ShipBay::Fighter => 4,
        ShipBay::Fitting => 5,
        ShipBay::Other => 6,
    }
}

#[derive(Default)]
struct TopLevel<'a> {
    ships: Vec<(NodeId, &'a CharacterAsset)>,
    containers: Vec<(NodeId, &'a CharacterAsset)>,
    items: Vec<(NodeId, &'a CharacterAsset)>,
    asset_safety: Vec<(NodeId, &'a CharacterAsset)>,
    in_space: Vec<(NodeId, &'a CharacterAsset)>,
}

fn partition_top_level(collection: &AssetCollection, location: NodeId) -> TopLevel<'_> {
    let mut assets: Vec<(NodeId, &CharacterAsset)> = collection
        .children(location)
        .iter()
        .filter_map(|id| Some((*id, collection.get(*id)?.asset()?)))
        .collect();
    assets.sort_by_key(|(_, a)| a.display_name());

    let mut top = TopLevel::default();
    for entry in assets {
        let asset = entry.1;
        match asset.placement() {
            TopLevelPlacement::AssetSafety => top.asset_safety.push(entry),
            TopLevelPlacement::InSpace => top.in_space.push(entry),
            TopLevelPlacement::Hangar if is_hangar_ship(asset) => top.ships.push(entry),
            TopLevelPlacement::Hangar if asset.is_container() => top.containers.push(entry),
            TopLevelPlacement::Hangar => top.items.push(entry),
        }
    }
    top.ships.sort_by_key(|(_, a)| a.display_name_with_type());
    top
}

/// Assembled ships in a hangar. Packaged ships are regular items.
fn is_hangar_ship(asset: &CharacterAsset) -> bool {
    asset.is_container() && asset.is_ship()
}

/// Returns the assets to show in the grid for a selected tree node.
///
/// Assets are sorted by display name. For the item hangar containers are listed first.
pub fn assets_for_node(collection: &AssetCollection, node: &LocationNode) -> Vec<CharacterAsset> {
    use LocationNodeVariant as V;

    let location_children = || {
        collection
            .location_node(LocationId(node.container_id))
            .map(|id| collection.child_assets(id).collect::<Vec<_>>())
            .unwrap_or_default()
    };
    let item_children = || {
        collection
            .node(ItemId(node.container_id))
            .map(|id| collection.child_assets(id).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    let mut assets: Vec<&CharacterAsset> = match node.variant {
        V::Location => location_children(),
        V::ShipHangar => location_children()
            .into_iter()
            .filter(|a| a.placement() == TopLevelPlacement::Hangar && is_hangar_ship(a))
            .collect(),
        V::ItemHangar => {
            let (mut containers, mut items): (Vec<_>, Vec<_>) = location_children()
                .into_iter()
                .filter(|a| a.placement() == TopLevelPlacement::Hangar && !is_hangar_ship(a))
                .partition(|a| a.is_container());
            containers.sort_by_key(|a| a.display_name());
            items.sort_by_key(|a| a.display_name());
            containers.extend(items);
            return containers.into_iter().cloned().collect();
        }
        V::InSpace => location_children()
            .into_iter()
            .filter(|a| a.placement() == TopLevelPlacement::InSpace)
            .collect(),
        V::Container | V::Ship | V::AssetSafety => item_children(),
        bay_variant => match bay_variant.bay() {
            Some(bay) => item_children()
                .into_iter()
                .filter(|a| a.ship_bay() == bay)
                .collect(),
            None => Vec::new(),
        },
    };
    assets.sort_by_key(|a| a.display_name());
    assets.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::asset::collection::tests::{asset, location, ship},
        model::{EveSolarSystem, SolarSystemId},
    };

    fn character() -> CharacterId {
        CharacterId::new(1001).unwrap()
    }

    fn children_variants(
        tree: &TreeData<LocationNode>,
        uid: &LocationNodeUid,
    ) -> Vec<LocationNodeVariant> {
        tree.children(Some(uid))
            .iter()
            .filter_map(|u| tree.node(u))
            .map(|n| n.variant)
            .collect()
    }

    fn jita() -> crate::model::EveLocation {
        let mut l = location(1, "Jita IV - Moon 4");
        l.solar_system = Some(EveSolarSystem {
            id: SolarSystemId(30000142),
            name: "Jita".to_string(),
            security_status: 0.946,
            constellation_name: "Kimotoro".to_string(),
            region_name: "The Forge".to_string(),
        });
        l
    }

    mod uid {
        use super::*;

        /// Expect the UID to combine character, container and variant
        #[test]
        fn formats_uid() {
            let node =
                LocationNode::new(character(), 42, LocationNodeVariant::CargoBay, "Cargo Bay", 0);

            assert_eq!(node.uid().to_string(), "1001-42-cargo_bay");
        }

        /// Expect nodes sharing a container ID to have distinct UIDs
        #[test]
        fn distinct_for_variants() {
            let a = LocationNode::new(character(), 1, LocationNodeVariant::Location, "", 0);
            let b = LocationNode::new(character(), 1, LocationNodeVariant::ItemHangar, "", 0);

            assert_ne!(a.uid(), b.uid());
        }
    }

    mod build_location_tree {
        use super::*;

        /// Expect locations sorted by name with hangars always present
        #[test]
        fn sorts_locations_and_adds_hangars() {
            let c = AssetCollection::new(
                vec![asset(10, 2, "Hangar", 1), asset(11, 1, "Hangar", 3)],
                vec![location(2, "Amarr"), jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let roots: Vec<_> = tree
                .roots()
                .iter()
                .filter_map(|u| tree.node(u))
                .map(|n| n.name.clone())
                .collect();

            assert_eq!(roots, vec!["Amarr", "Jita IV - Moon 4"]);
            let amarr = tree.roots()[0];
            assert_eq!(
                children_variants(&tree, &amarr),
                vec![LocationNodeVariant::ShipHangar, LocationNodeVariant::ItemHangar]
            );
        }

        /// Expect locations without a solar system to be unknown with "?" security
        #[test]
        fn marks_unknown_locations() {
            let c = AssetCollection::new(
                vec![asset(10, 2, "Hangar", 1), asset(11, 1, "Hangar", 1)],
                vec![location(2, "Amarr"), jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let amarr = tree.node(&tree.roots()[0]).unwrap();
            let jita = tree.node(&tree.roots()[1]).unwrap();

            assert!(amarr.is_unknown);
            assert_eq!(amarr.security_display(), "?");
            assert!(!jita.is_unknown);
            assert_eq!(jita.security_display(), "0.9");
        }

        /// Expect bays for a ship with only the cargo bay added when empty
        #[test]
        fn adds_ship_bays() {
            let c = AssetCollection::new(
                vec![
                    ship(10, 1, "Merlin"),
                    asset(11, 10, "HiSlot0", 1),
                    asset(12, 10, "DroneBay", 5),
                    ship(20, 1, "Rifter"),
                ],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let merlin = LocationNodeUid {
                character_id: character(),
                container_id: 10,
                variant: LocationNodeVariant::Ship,
            };
            let rifter = LocationNodeUid {
                container_id: 20,
                ..merlin
            };

            assert_eq!(
                children_variants(&tree, &merlin),
                vec![
                    LocationNodeVariant::Fitting,
                    LocationNodeVariant::CargoBay,
                    LocationNodeVariant::DroneBay
                ]
            );
            assert_eq!(
                children_variants(&tree, &rifter),
                vec![LocationNodeVariant::CargoBay]
            );
            let drones = LocationNodeUid {
                variant: LocationNodeVariant::DroneBay,
                ..merlin
            };
            assert_eq!(tree.node(&drones).unwrap().item_count, 5);
        }

        /// Expect the bay counts of a ship to add up to the ship's count
        #[test]
        fn bay_counts_add_up_to_ship() {
            let c = AssetCollection::new(
                vec![
                    ship(10, 1, "Merlin"),
                    asset(11, 10, "HiSlot0", 1),
                    asset(12, 10, "MedSlot1", 1),
                    asset(13, 10, "Cargo", 7),
                    asset(14, 10, "DroneBay", 3),
                    asset(15, 10, "SpecializedFuelBay", 250),
                ],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let merlin = LocationNodeUid {
                character_id: character(),
                container_id: 10,
                variant: LocationNodeVariant::Ship,
            };
            let bays: i64 = tree
                .children(Some(&merlin))
                .iter()
                .filter_map(|u| tree.node(u))
                .map(|n| n.item_count)
                .sum();

            assert_eq!(tree.node(&merlin).unwrap().item_count, bays);
            assert_eq!(bays, 262);
        }

        /// Expect a ship with two cargo items and no drones to have only a cargo bay
        #[test]
        fn cargo_only_ship() {
            let c = AssetCollection::new(
                vec![
                    ship(10, 1, "Merlin"),
                    asset(11, 10, "Cargo", 1),
                    asset(12, 10, "Cargo", 1),
                ],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let merlin = LocationNodeUid {
                character_id: character(),
                container_id: 10,
                variant: LocationNodeVariant::Ship,
            };
            let cargo = LocationNodeUid {
                variant: LocationNodeVariant::CargoBay,
                ..merlin
            };
            let drones = LocationNodeUid {
                variant: LocationNodeVariant::DroneBay,
                ..merlin
            };

            assert_eq!(
                children_variants(&tree, &merlin),
                vec![LocationNodeVariant::CargoBay]
            );
            let cargo = tree.node(&cargo).unwrap();
            assert_eq!(cargo.name, "Cargo Bay");
            assert_eq!(cargo.item_count, 2);
            assert!(tree.node(&drones).is_none());
        }

        /// Expect the ship hangar count to exclude ship contents
        #[test]
        fn counts_ship_hangar() {
            let c = AssetCollection::new(
                vec![
                    ship(10, 1, "Merlin"),
                    asset(11, 10, "Cargo", 100),
                    ship(20, 1, "Rifter"),
                ],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let hangar = LocationNodeUid {
                character_id: character(),
                container_id: 1,
                variant: LocationNodeVariant::ShipHangar,
            };

            assert_eq!(tree.node(&hangar).unwrap().item_count, 2);
        }

        /// Expect containers below the item hangar with their content count
        #[test]
        fn adds_containers() {
            let mut can = asset(30, 1, "Hangar", 1);
            can.is_singleton = true;
            can.eve_type = Some(crate::model::EveType {
                id: 3465,
                name: "Large Secure Container".to_string(),
                group: crate::model::EveGroup {
                    id: crate::model::universe::EVE_GROUP_SECURE_CARGO_CONTAINER,
                    name: "Secure Cargo Container".to_string(),
                    category: crate::model::EveCategory {
                        id: 2,
                        name: "Celestial".to_string(),
                    },
                },
            });
            let c = AssetCollection::new(
                vec![can, asset(31, 30, "Unlocked", 4), asset(32, 1, "Hangar", 2)],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let hangar = LocationNodeUid {
                character_id: character(),
                container_id: 1,
                variant: LocationNodeVariant::ItemHangar,
            };
            let container = LocationNodeUid {
                container_id: 30,
                variant: LocationNodeVariant::Container,
                ..hangar
            };

            assert_eq!(tree.node(&hangar).unwrap().item_count, 7);
            assert_eq!(tree.node(&container).unwrap().item_count, 4);
        }

        /// Expect one asset safety node per wrap and one in space node
        #[test]
        fn adds_asset_safety_and_in_space() {
            let mut in_space = asset(40, 1, "AutoFit", 1);
            in_space.location_type = crate::model::LocationType::SolarSystem;
            let c = AssetCollection::new(
                vec![
                    asset(50, 1, "AssetSafety", 1),
                    asset(51, 50, "Unlocked", 3),
                    asset(60, 1, "AssetSafety", 1),
                    in_space,
                ],
                vec![jita()],
            );
            let tree = build_location_tree(&c, character()).unwrap();
            let variants = children_variants(&tree, &tree.roots()[0]);

            assert_eq!(
                variants,
                vec![
                    LocationNodeVariant::ShipHangar,
                    LocationNodeVariant::ItemHangar,
                    LocationNodeVariant::AssetSafety,
                    LocationNodeVariant::AssetSafety,
                    LocationNodeVariant::InSpace,
                ]
            );
            let wrap = LocationNodeUid {
                character_id: character(),
                container_id: 50,
                variant: LocationNodeVariant::AssetSafety,
            };
            assert_eq!(tree.node(&wrap).unwrap().item_count, 3);
        }
    }

    mod assets_for_node {
        use super::*;

        /// Expect bay nodes to list only items of that bay
        #[test]
        fn filters_by_bay() {
            let c = AssetCollection::new(
                vec![
                    ship(10, 1, "Merlin"),
                    asset(11, 10, "HiSlot0", 1),
                    asset(12, 10, "Cargo", 5),
                    asset(13, 10, "SpecializedOreHold", 5),
                ],
                vec![jita()],
            );
            let node =
                LocationNode::new(character(), 10, LocationNodeVariant::CargoBay, "Cargo Bay", 0);
            let ids: Vec<_> = assets_for_node(&c, &node).iter().map(|a| a.item_id).collect();

            assert_eq!(ids.len(), 2);
            assert!(ids.contains(&ItemId(12)) && ids.contains(&ItemId(13)));
        }

        /// Expect the ship hangar to list assembled ships only
        #[test]
        fn lists_ships() {
            let c = AssetCollection::new(
                vec![ship(10, 1, "Merlin"), asset(32, 1, "Hangar", 2)],
                vec![jita()],
            );
            let node = LocationNode::new(
                character(),
                1,
                LocationNodeVariant::ShipHangar,
                "Ship Hangar",
                0,
            );
            let ids: Vec<_> = assets_for_node(&c, &node).iter().map(|a| a.item_id).collect();

            assert_eq!(ids, vec![ItemId(10)]);
        }
    }
}
