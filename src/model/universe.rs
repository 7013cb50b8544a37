//! EVE universe entities: types, solar systems, locations and routes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    display::Importance,
    id::{LocationId, SolarSystemId},
};

/// Category ID of ships.
pub const EVE_CATEGORY_SHIP: i32 = 6;
/// Category ID of blueprints.
pub const EVE_CATEGORY_BLUEPRINT: i32 = 9;
/// Category ID of SKINs.
pub const EVE_CATEGORY_SKIN: i32 = 91;

/// Group IDs of items which can contain other items.
pub const EVE_GROUP_CARGO_CONTAINER: i32 = 12;
pub const EVE_GROUP_SECURE_CARGO_CONTAINER: i32 = 340;
pub const EVE_GROUP_AUDIT_LOG_SECURE_CARGO_CONTAINER: i32 = 448;
pub const EVE_GROUP_AUDIT_LOG_FREIGHT_CONTAINER: i32 = 649;

/// Type ID of the wrap holding assets moved into asset safety.
pub const EVE_TYPE_ASSET_SAFETY_WRAP: i32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveCategory {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveGroup {
    pub id: i32,
    pub name: String,
    pub category: EveCategory,
}

/// An inventory type, e.g. "Merlin" or "Tritanium".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveType {
    pub id: i32,
    pub name: String,
    pub group: EveGroup,
}

impl EveType {
    pub fn is_ship(&self) -> bool {
        self.group.category.id == EVE_CATEGORY_SHIP
    }

    pub fn is_blueprint(&self) -> bool {
        self.group.category.id == EVE_CATEGORY_BLUEPRINT
    }

    pub fn is_skin(&self) -> bool {
        self.group.category.id == EVE_CATEGORY_SKIN
    }
}

/// Security classification of a solar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarSystemSecurityType {
    HighSec,
    LowSec,
    NullSec,
}

impl SolarSystemSecurityType {
    /// Classifies a security status value.
    ///
    /// The in-game display rounds to one decimal, so 0.45 and up counts as high sec.
    pub fn from_value(security_status: f32) -> Self {
        if security_status >= 0.45 {
            Self::HighSec
        } else if security_status > 0.0 {
            Self::LowSec
        } else {
            Self::NullSec
        }
    }

    /// Color importance used when rendering the security value.
    pub fn importance(self) -> Importance {
        match self {
            Self::HighSec => Importance::Success,
            Self::LowSec => Importance::Warning,
            Self::NullSec => Importance::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveSolarSystem {
    pub id: SolarSystemId,
    pub name: String,
    pub security_status: f32,
    #[serde(default)]
    pub constellation_name: String,
    #[serde(default)]
    pub region_name: String,
}

impl EveSolarSystem {
    pub fn security_type(&self) -> SolarSystemSecurityType {
        SolarSystemSecurityType::from_value(self.security_status)
    }

    /// Security status formatted the way the game shows it, e.g. "0.5".
    pub fn security_display(&self) -> String {
        format!("{:.1}", self.security_status)
    }
}

/// A location in EVE, e.g. a station, a structure or a solar system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveLocation {
    pub id: LocationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub solar_system: Option<EveSolarSystem>,
    #[serde(default)]
    pub type_name: Option<String>,
}

impl EveLocation {
    /// Name for display, falls back to the ID for locations we have no name for.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        if let Some(system) = &self.solar_system {
            return system.name.clone();
        }
        format!("Unknown location #{}", self.id)
    }

    pub fn solar_system_name(&self) -> String {
        self.solar_system
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    pub fn region_name(&self) -> String {
        self.solar_system
            .as_ref()
            .map(|s| s.region_name.clone())
            .unwrap_or_default()
    }
}

/// Route preference when planning routes between solar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    #[default]
    Shortest,
    Secure,
    Insecure,
}

impl std::str::FromStr for RoutePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shortest" => Ok(Self::Shortest),
            "secure" => Ok(Self::Secure),
            "insecure" => Ok(Self::Insecure),
            other => Err(format!(
                "unknown route preference \"{}\", expected shortest, secure or insecure",
                other
            )),
        }
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Shortest => "Shortest",
            Self::Secure => "Secure",
            Self::Insecure => "Insecure",
        };
        write!(f, "{}", s)
    }
}

/// Request for a route between two solar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteHeader {
    pub origin: SolarSystemId,
    pub destination: SolarSystemId,
    pub preference: RoutePreference,
}
