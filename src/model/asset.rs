//! Character assets and the predicates used to classify them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::{
    id::{CharacterId, ItemId, LocationId},
    universe::{
        EveType, EVE_GROUP_AUDIT_LOG_FREIGHT_CONTAINER, EVE_GROUP_AUDIT_LOG_SECURE_CARGO_CONTAINER,
        EVE_GROUP_CARGO_CONTAINER, EVE_GROUP_SECURE_CARGO_CONTAINER, EVE_TYPE_ASSET_SAFETY_WRAP,
    },
};

/// Flags of specialized holds which are shown as part of a ship's cargo bay.
const CARGO_HOLD_FLAGS: &[&str] = &[
    "FleetHangar",
    "MobileDepotHold",
    "MoonMaterialBay",
    "QuafeBay",
    "SpecializedAmmoHold",
    "SpecializedAsteroidHold",
    "SpecializedCommandCenterHold",
    "SpecializedGasHold",
    "SpecializedIceHold",
    "SpecializedIndustrialShipHold",
    "SpecializedLargeShipHold",
    "SpecializedMaterialBay",
    "SpecializedMediumShipHold",
    "SpecializedMineralHold",
    "SpecializedOreHold",
    "SpecializedPlanetaryCommoditiesHold",
    "SpecializedSalvageHold",
    "SpecializedShipHold",
    "SpecializedSmallShipHold",
    "StructureDeedBay",
];

/// Where inside its parent location an asset is stored, as reported by ESI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFlag {
    AssetSafety,
    Cargo,
    DroneBay,
    FighterBay,
    FighterTube(u8),
    FrigateEscapeBay,
    Hangar,
    HiSlot(u8),
    LoSlot(u8),
    MedSlot(u8),
    RigSlot(u8),
    /// A specialized hold counted as cargo, e.g. "SpecializedOreHold".
    CargoHold(String),
    SpecializedFuelBay,
    SubSystemSlot(u8),
    Other(String),
}

impl LocationFlag {
    pub fn is_fitting_slot(&self) -> bool {
        matches!(
            self,
            Self::HiSlot(_)
                | Self::MedSlot(_)
                | Self::LoSlot(_)
                | Self::RigSlot(_)
                | Self::SubSystemSlot(_)
        )
    }
}

fn parse_slot(s: &str, prefix: &str) -> Option<u8> {
    s.strip_prefix(prefix).and_then(|n| n.parse().ok())
}

impl FromStr for LocationFlag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flag = match s {
            "AssetSafety" => Self::AssetSafety,
            "Cargo" => Self::Cargo,
            "DroneBay" => Self::DroneBay,
            "FighterBay" => Self::FighterBay,
            "FrigateEscapeBay" => Self::FrigateEscapeBay,
            "Hangar" => Self::Hangar,
            "SpecializedFuelBay" => Self::SpecializedFuelBay,
            s if CARGO_HOLD_FLAGS.contains(&s) => Self::CargoHold(s.to_string()),
            s => {
                if let Some(n) = parse_slot(s, "HiSlot") {
                    Self::HiSlot(n)
                } else if let Some(n) = parse_slot(s, "MedSlot") {
                    Self::MedSlot(n)
                } else if let Some(n) = parse_slot(s, "LoSlot") {
                    Self::LoSlot(n)
                } else if let Some(n) = parse_slot(s, "RigSlot") {
                    Self::RigSlot(n)
                } else if let Some(n) = parse_slot(s, "SubSystemSlot") {
                    Self::SubSystemSlot(n)
                } else if let Some(n) = parse_slot(s, "FighterTube") {
                    Self::FighterTube(n)
                } else {
                    Self::Other(s.to_string())
                }
            }
        };
        Ok(flag)
    }
}

impl From<String> for LocationFlag {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(flag) => flag,
            Err(never) => match never {},
        }
    }
}

impl From<LocationFlag> for String {
    fn from(value: LocationFlag) -> Self {
        value.to_string()
    }
}

impl fmt::Display for LocationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetSafety => write!(f, "AssetSafety"),
            Self::Cargo => write!(f, "Cargo"),
            Self::DroneBay => write!(f, "DroneBay"),
            Self::FighterBay => write!(f, "FighterBay"),
            Self::FighterTube(n) => write!(f, "FighterTube{}", n),
            Self::FrigateEscapeBay => write!(f, "FrigateEscapeBay"),
            Self::Hangar => write!(f, "Hangar"),
            Self::HiSlot(n) => write!(f, "HiSlot{}", n),
            Self::LoSlot(n) => write!(f, "LoSlot{}", n),
            Self::MedSlot(n) => write!(f, "MedSlot{}", n),
            Self::RigSlot(n) => write!(f, "RigSlot{}", n),
            Self::CargoHold(s) => write!(f, "{}", s),
            Self::SpecializedFuelBay => write!(f, "SpecializedFuelBay"),
            Self::SubSystemSlot(n) => write!(f, "SubSystemSlot{}", n),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Kind of location an asset's `location_id` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Station,
    SolarSystem,
    Item,
    #[default]
    Other,
}

/// Variant of an inventory type, used for picking the right icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EveTypeVariant {
    Regular,
    Bpo,
    Bpc,
    Skin,
}

/// Top-level placement of an asset directly inside a location.
///
/// Exactly one placement applies to every asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevelPlacement {
    AssetSafety,
    Hangar,
    InSpace,
}

/// Bay of a ship an item is stored in.
///
/// Exactly one bay applies to every item inside a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipBay {
    Cargo,
    Drone,
    FrigateEscape,
    Fuel,
    Fighter,
    Fitting,
    Other,
}

/// An asset owned by a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAsset {
    pub character_id: CharacterId,
    pub item_id: ItemId,
    #[serde(default)]
    pub eve_type: Option<EveType>,
    #[serde(default)]
    pub is_blueprint_copy: bool,
    #[serde(default)]
    pub is_singleton: bool,
    pub location_flag: LocationFlag,
    pub location_id: LocationId,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub quantity: i32,
}

impl CharacterAsset {
    pub fn type_name(&self) -> &str {
        self.eve_type.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }

    fn custom_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Custom name when set, else the type name.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.custom_name() {
            return name.to_string();
        }
        self.type_name_with_copy_marker()
    }

    /// Type name followed by the custom name in quotes when set, e.g. `Merlin "Bob"`.
    pub fn display_name_with_type(&self) -> String {
        if let Some(name) = self.custom_name() {
            return format!("{} \"{}\"", self.type_name(), name);
        }
        self.type_name_with_copy_marker()
    }

    fn type_name_with_copy_marker(&self) -> String {
        let mut s = self.type_name().to_string();
        if self.is_blueprint_copy {
            s.push_str(" (Copy)");
        }
        s
    }

    pub fn is_ship(&self) -> bool {
        self.eve_type.as_ref().is_some_and(EveType::is_ship)
    }

    /// Reports whether this asset can hold other assets.
    pub fn is_container(&self) -> bool {
        if !self.is_singleton {
            return false;
        }
        let Some(eve_type) = &self.eve_type else {
            return false;
        };
        if eve_type.is_ship() || eve_type.id == EVE_TYPE_ASSET_SAFETY_WRAP {
            return true;
        }
        matches!(
            eve_type.group.id,
            EVE_GROUP_AUDIT_LOG_FREIGHT_CONTAINER
                | EVE_GROUP_AUDIT_LOG_SECURE_CARGO_CONTAINER
                | EVE_GROUP_CARGO_CONTAINER
                | EVE_GROUP_SECURE_CARGO_CONTAINER
        )
    }

    pub fn variant(&self) -> EveTypeVariant {
        let Some(eve_type) = &self.eve_type else {
            return EveTypeVariant::Regular;
        };
        if eve_type.is_skin() {
            EveTypeVariant::Skin
        } else if self.is_blueprint_copy {
            EveTypeVariant::Bpc
        } else if eve_type.is_blueprint() {
            EveTypeVariant::Bpo
        } else {
            EveTypeVariant::Regular
        }
    }

    pub fn is_in_asset_safety(&self) -> bool {
        self.location_flag == LocationFlag::AssetSafety
    }

    pub fn is_in_hangar(&self) -> bool {
        self.location_flag == LocationFlag::Hangar
    }

    pub fn is_in_space(&self) -> bool {
        self.location_type == LocationType::SolarSystem
    }

    pub fn is_in_any_cargo_hold(&self) -> bool {
        matches!(
            self.location_flag,
            LocationFlag::Cargo | LocationFlag::CargoHold(_)
        )
    }

    pub fn is_in_drone_bay(&self) -> bool {
        self.location_flag == LocationFlag::DroneBay
    }

    pub fn is_in_fighter_bay(&self) -> bool {
        matches!(
            self.location_flag,
            LocationFlag::FighterBay | LocationFlag::FighterTube(_)
        )
    }

    pub fn is_in_frigate_escape_bay(&self) -> bool {
        self.location_flag == LocationFlag::FrigateEscapeBay
    }

    pub fn is_in_fuel_bay(&self) -> bool {
        self.location_flag == LocationFlag::SpecializedFuelBay
    }

    pub fn is_fitted(&self) -> bool {
        self.location_flag.is_fitting_slot()
    }

    /// Reports whether an item inside a ship is in none of the known bays.
    pub fn is_ship_other(&self) -> bool {
        !self.is_in_any_cargo_hold()
            && !self.is_in_drone_bay()
            && !self.is_in_fighter_bay()
            && !self.is_in_fuel_bay()
            && !self.is_fitted()
            && !self.is_in_frigate_escape_bay()
    }

    /// Classifies an asset sitting directly in a location.
    ///
    /// Asset safety takes priority over the hangar; anything else is treated as in space.
    pub fn placement(&self) -> TopLevelPlacement {
        if self.is_in_asset_safety() {
            TopLevelPlacement::AssetSafety
        } else if self.is_in_hangar() {
            TopLevelPlacement::Hangar
        } else {
            TopLevelPlacement::InSpace
        }
    }

    /// Classifies an item stored inside a ship.
    pub fn ship_bay(&self) -> ShipBay {
        if self.is_in_any_cargo_hold() {
            ShipBay::Cargo
        } else if self.is_in_drone_bay() {
            ShipBay::Drone
        } else if self.is_in_frigate_escape_bay() {
            ShipBay::FrigateEscape
        } else if self.is_in_fuel_bay() {
            ShipBay::Fuel
        } else if self.is_in_fighter_bay() {
            ShipBay::Fighter
        } else if self.is_fitted() {
            ShipBay::Fitting
        } else {
            ShipBay::Other
        }
    }
}
