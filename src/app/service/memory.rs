//! In-memory implementation of the data services, loaded from a JSON snapshot.

use std::{
    collections::{BTreeSet, HashMap},
    path::Path,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    app::{
        error::{service::ServiceError, Error},
        service::{
            route::{RouteGraph, Stargate},
            CharacterService, EveUniverseService,
        },
        status::StatusCache,
    },
    model::{
        Character, CharacterAsset, CharacterId, CharacterSection, CharacterShort, EveLocation,
        EveSolarSystem, GeneralSection, JumpClone, RouteHeader, SectionStatus, SolarSystemId,
    },
};

/// Update state of a character section as stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSection {
    pub character_id: CharacterId,
    pub section: CharacterSection,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Exported application data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Time the snapshot was taken. Sections without their own state count as completed then.
    pub exported_at: Option<DateTime<Utc>>,
    pub characters: Vec<Character>,
    pub assets: Vec<CharacterAsset>,
    pub jump_clones: Vec<JumpClone>,
    pub locations: Vec<EveLocation>,
    pub solar_systems: Vec<EveSolarSystem>,
    pub stargates: Vec<Stargate>,
    pub sections: Vec<SnapshotSection>,
}

impl Snapshot {
    /// Reads a snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let snapshot = serde_json::from_str(&data)?;
        Ok(snapshot)
    }
}

/// Character and universe data held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    exported_at: Option<DateTime<Utc>>,
    characters: Vec<Character>,
    assets: HashMap<CharacterId, Vec<CharacterAsset>>,
    jump_clones: Vec<JumpClone>,
    locations: Vec<EveLocation>,
    solar_systems: HashMap<SolarSystemId, EveSolarSystem>,
    routes: RouteGraph,
    sections: Vec<SnapshotSection>,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut characters = snapshot.characters;
        characters.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut assets: HashMap<CharacterId, Vec<CharacterAsset>> = HashMap::new();
        for asset in snapshot.assets {
            assets.entry(asset.character_id).or_default().push(asset);
        }

        let routes = RouteGraph::new(
            snapshot
                .solar_systems
                .iter()
                .map(|s| (s.id, s.security_type())),
            &snapshot.stargates,
        );

        tracing::info!(
            characters = characters.len(),
            locations = snapshot.locations.len(),
            solar_systems = snapshot.solar_systems.len(),
            "Loaded snapshot into memory store"
        );

        Self {
            exported_at: snapshot.exported_at,
            characters,
            assets,
            jump_clones: snapshot.jump_clones,
            locations: snapshot.locations,
            solar_systems: snapshot
                .solar_systems
                .into_iter()
                .map(|s| (s.id, s))
                .collect(),
            routes,
            sections: snapshot.sections,
        }
    }

    /// Writes the update states of the snapshot into a status cache.
    ///
    /// Sections without a recorded state count as completed at export time.
    pub fn init_status_cache(&self, cache: &StatusCache) {
        let completed_at = self.exported_at.unwrap_or_else(Utc::now);
        let completed = |section_timeout| SectionStatus {
            started_at: None,
            completed_at: Some(completed_at),
            error_message: None,
            timeout: section_timeout,
        };

        cache.set_characters(self.characters.iter().map(CharacterShort::from).collect());
        for character in &self.characters {
            for section in CharacterSection::ALL {
                cache.character_section_set(character.id, section, completed(section.timeout()));
            }
        }
        for s in &self.sections {
            cache.character_section_set(
                s.character_id,
                s.section,
                SectionStatus {
                    started_at: None,
                    completed_at: s.completed_at,
                    error_message: s.error_message.clone(),
                    timeout: s.section.timeout(),
                },
            );
        }
        for section in [GeneralSection::MarketPrices, GeneralSection::Universe] {
            cache.general_section_set(section, completed(section.timeout()));
        }
    }

    fn character(&self, character_id: CharacterId) -> Result<&Character, Error> {
        self.characters
            .iter()
            .find(|c| c.id == character_id)
            .ok_or_else(|| {
                ServiceError::NotFound {
                    entity: "character",
                    id: i64::from(character_id.get()),
                }
                .into()
            })
    }
}

#[async_trait]
impl CharacterService for MemoryStore {
    async fn list_characters(&self) -> Result<Vec<Character>, Error> {
        Ok(self.characters.clone())
    }

    async fn get_character(&self, character_id: CharacterId) -> Result<Character, Error> {
        self.character(character_id).cloned()
    }

    async fn list_assets(&self, character_id: CharacterId) -> Result<Vec<CharacterAsset>, Error> {
        Ok(self.assets.get(&character_id).cloned().unwrap_or_default())
    }

    async fn list_jump_clones(&self, character_id: CharacterId) -> Result<Vec<JumpClone>, Error> {
        let mut clones: Vec<JumpClone> = self
            .jump_clones
            .iter()
            .filter(|c| c.character.id == character_id)
            .cloned()
            .collect();
        clones.sort_by_key(|c| c.location.display_name());
        Ok(clones)
    }

    async fn list_all_jump_clones(&self) -> Result<Vec<JumpClone>, Error> {
        Ok(self.jump_clones.clone())
    }

    async fn list_tags_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<BTreeSet<String>, Error> {
        Ok(self.character(character_id)?.tags.clone())
    }
}

#[async_trait]
impl EveUniverseService for MemoryStore {
    async fn list_locations(&self) -> Result<Vec<EveLocation>, Error> {
        Ok(self.locations.clone())
    }

    async fn list_solar_systems(&self) -> Result<Vec<EveSolarSystem>, Error> {
        let mut systems: Vec<_> = self.solar_systems.values().cloned().collect();
        systems.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(systems)
    }

    async fn get_solar_system(&self, id: SolarSystemId) -> Result<EveSolarSystem, Error> {
        self.solar_systems.get(&id).cloned().ok_or_else(|| {
            ServiceError::NotFound {
                entity: "solar system",
                id: i64::from(id.0),
            }
            .into()
        })
    }

    async fn fetch_routes(
        &self,
        headers: Vec<RouteHeader>,
    ) -> Result<HashMap<RouteHeader, Vec<EveSolarSystem>>, Error> {
        let mut routes = HashMap::with_capacity(headers.len());
        for header in headers {
            let Some(ids) = self
                .routes
                .route(header.origin, header.destination, header.preference)
            else {
                tracing::debug!(
                    origin = %header.origin,
                    destination = %header.destination,
                    "Route requested for unknown solar system"
                );
                continue;
            };
            let systems = ids
                .into_iter()
                .filter_map(|id| self.solar_systems.get(&id).cloned())
                .collect();
            routes.insert(header, systems);
        }
        Ok(routes)
    }
}
