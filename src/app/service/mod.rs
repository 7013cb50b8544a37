//! Data services used by the views.
//!
//! The traits describe what the GUI needs from the storage layer. [`memory::MemoryStore`]
//! implements them on top of a JSON snapshot.

pub mod memory;
pub mod route;

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::{
    app::error::Error,
    model::{
        Character, CharacterAsset, CharacterId, EveLocation, EveSolarSystem, JumpClone,
        RouteHeader, SolarSystemId,
    },
};

/// Access to character data.
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Returns all characters of the user sorted by name.
    async fn list_characters(&self) -> Result<Vec<Character>, Error>;

    /// Returns a character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(Error::ServiceError(ServiceError::NotFound))` - Unknown character
    async fn get_character(&self, character_id: CharacterId) -> Result<Character, Error>;

    /// Returns all assets of a character.
    async fn list_assets(&self, character_id: CharacterId) -> Result<Vec<CharacterAsset>, Error>;

    /// Returns the jump clones of a character sorted by location name.
    async fn list_jump_clones(&self, character_id: CharacterId) -> Result<Vec<JumpClone>, Error>;

    /// Returns the jump clones of all characters.
    async fn list_all_jump_clones(&self) -> Result<Vec<JumpClone>, Error>;

    async fn list_tags_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<BTreeSet<String>, Error>;
}

/// Access to universe data.
#[async_trait]
pub trait EveUniverseService: Send + Sync {
    async fn list_locations(&self) -> Result<Vec<EveLocation>, Error>;

    async fn list_solar_systems(&self) -> Result<Vec<EveSolarSystem>, Error>;

    async fn get_solar_system(&self, id: SolarSystemId) -> Result<EveSolarSystem, Error>;

    /// Computes routes for many origin/destination pairs.
    ///
    /// # Returns
    /// Route per header as the list of systems from origin to destination, both included.
    /// An empty list means there is no route. Headers with an unknown system are omitted.
    async fn fetch_routes(
        &self,
        headers: Vec<RouteHeader>,
    ) -> Result<HashMap<RouteHeader, Vec<EveSolarSystem>>, Error>;
}
