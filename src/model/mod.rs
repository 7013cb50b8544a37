//! Domain entities shared by the application core and the GUI.

pub mod asset;
pub mod character;
pub mod display;
pub mod id;
pub mod section;
pub mod universe;

pub use asset::{CharacterAsset, LocationFlag, LocationType, ShipBay, TopLevelPlacement};
pub use character::{Character, CharacterShort, JumpClone, NextCloneJump};
pub use display::Importance;
pub use id::{CharacterId, IdError, ItemId, LocationId, SolarSystemId};
pub use section::{CharacterSection, GeneralSection, SectionStatus};
pub use universe::{
    EveCategory, EveGroup, EveLocation, EveSolarSystem, EveType, RouteHeader, RoutePreference,
    SolarSystemSecurityType,
};
