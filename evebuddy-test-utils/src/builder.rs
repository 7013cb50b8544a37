//! Declarative test builder.
//!
//! Collects characters, assets, universe data and section states and loads them into an
//! in-memory store on `build()`, the same way the application loads a snapshot at startup.

use chrono::Utc;
use evebuddy::{
    app::{
        service::{
            memory::{Snapshot, SnapshotSection},
            route::Stargate,
        },
        view::ViewConfig,
    },
    model::{
        Character, CharacterAsset, CharacterSection, EveLocation, EveSolarSystem, JumpClone,
        SolarSystemId,
    },
};

use crate::{error::TestError, fixtures::factory, setup::TestSetup};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    snapshot: Snapshot,
    current_character: Option<i32>,
    view_config: Option<ViewConfig>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character.
    ///
    /// # Arguments
    /// - `character` - Character to add, see [`factory::mock_character`]
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_character(mut self, character: Character) -> Self {
        self.snapshot.characters.push(character);
        self
    }

    /// Add a character with a tag.
    pub fn with_tagged_character(mut self, id: i32, name: &str, tag: &str) -> Self {
        let mut character = factory::mock_character(id, name);
        character.tags.insert(tag.to_string());
        self.snapshot.characters.push(character);
        self
    }

    pub fn with_asset(mut self, asset: CharacterAsset) -> Self {
        self.snapshot.assets.push(asset);
        self
    }

    pub fn with_assets(mut self, assets: impl IntoIterator<Item = CharacterAsset>) -> Self {
        self.snapshot.assets.extend(assets);
        self
    }

    pub fn with_location(mut self, location: EveLocation) -> Self {
        self.snapshot.locations.push(location);
        self
    }

    pub fn with_solar_system(mut self, system: EveSolarSystem) -> Self {
        self.snapshot.solar_systems.push(system);
        self
    }

    /// Connect two solar systems with a stargate. Stargates work in both directions.
    pub fn with_stargate(mut self, from: i32, to: i32) -> Self {
        self.snapshot.stargates.push(Stargate {
            from: SolarSystemId(from),
            to: SolarSystemId(to),
        });
        self
    }

    pub fn with_jump_clone(mut self, clone: JumpClone) -> Self {
        self.snapshot.jump_clones.push(clone);
        self
    }

    /// Mark a section of a character as never loaded.
    pub fn with_missing_section(mut self, character_id: i32, section: CharacterSection) -> Self {
        self.snapshot.sections.push(SnapshotSection {
            character_id: factory::character_id(character_id),
            section,
            completed_at: None,
            error_message: None,
        });
        self
    }

    /// Mark a section of a character as failed.
    pub fn with_failed_section(
        mut self,
        character_id: i32,
        section: CharacterSection,
        error: &str,
    ) -> Self {
        self.snapshot.sections.push(SnapshotSection {
            character_id: factory::character_id(character_id),
            section,
            completed_at: Some(Utc::now()),
            error_message: Some(error.to_string()),
        });
        self
    }

    /// Make a character the current character after the build.
    pub fn with_current_character(mut self, character_id: i32) -> Self {
        self.current_character = Some(character_id);
        self
    }

    pub fn with_view_config(mut self, config: ViewConfig) -> Self {
        self.view_config = Some(config);
        self
    }

    /// Load all queued data into a new in-memory store.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Store, status cache and context ready for use
    /// - `Err(TestError)` - The current character is unknown
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut snapshot = self.snapshot;
        if snapshot.exported_at.is_none() {
            snapshot.exported_at = Some(Utc::now());
        }

        let setup = TestSetup::new(snapshot, self.view_config.unwrap_or_default());
        if let Some(id) = self.current_character {
            setup
                .ctx
                .switch_character(factory::character_id(id))
                .await?;
        }
        Ok(setup)
    }
}
