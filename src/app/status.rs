//! In-memory cache of section update states.
//!
//! The update scheduler writes the state of each section here after every update. Views read
//! it to find out whether data for a character has been loaded at all before querying it.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::model::{CharacterId, CharacterSection, CharacterShort, GeneralSection, SectionStatus};

/// Summary of the update states of a group of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    /// Sections with current data and no error.
    pub current: usize,
    pub errors: usize,
    /// Sections never loaded.
    pub missing: usize,
    pub is_running: bool,
    pub total: usize,
}

impl StatusSummary {
    fn add(&mut self, status: Option<&SectionStatus>, now: DateTime<Utc>) {
        self.total += 1;
        let Some(status) = status else {
            self.missing += 1;
            return;
        };
        if !status.is_ok() {
            self.errors += 1;
        } else if status.is_current(now) {
            self.current += 1;
        } else if status.is_missing() {
            self.missing += 1;
        }
        if status.is_running() {
            self.is_running = true;
        }
    }

    fn merge(&mut self, other: StatusSummary) {
        self.current += other.current;
        self.errors += other.errors;
        self.missing += other.missing;
        self.is_running |= other.is_running;
        self.total += other.total;
    }

    /// Share of current sections in percent.
    pub fn current_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f32 / self.total as f32 * 100.0
    }
}

#[derive(Debug, Default)]
struct Inner {
    characters: Vec<CharacterShort>,
    character_sections: HashMap<(CharacterId, CharacterSection), SectionStatus>,
    general_sections: HashMap<GeneralSection, SectionStatus>,
}

/// Shared status cache. Clones refer to the same cache.
#[derive(Debug, Clone, Default)]
pub struct StatusCache {
    inner: Arc<RwLock<Inner>>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list of known characters, kept in alphabetical order.
    pub fn set_characters(&self, mut characters: Vec<CharacterShort>) {
        characters.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        self.inner.write().characters = characters;
    }

    pub fn list_characters(&self) -> Vec<CharacterShort> {
        self.inner.read().characters.clone()
    }

    /// Returns the name of a character or an empty string if it is not known.
    pub fn character_name(&self, character_id: CharacterId) -> String {
        self.inner
            .read()
            .characters
            .iter()
            .find(|c| c.id == character_id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    pub fn character_section_set(
        &self,
        character_id: CharacterId,
        section: CharacterSection,
        status: SectionStatus,
    ) {
        self.inner
            .write()
            .character_sections
            .insert((character_id, section), status);
    }

    pub fn character_section_get(
        &self,
        character_id: CharacterId,
        section: CharacterSection,
    ) -> Option<SectionStatus> {
        self.inner
            .read()
            .character_sections
            .get(&(character_id, section))
            .cloned()
    }

    /// Reports whether data of a character section has been loaded at least once.
    pub fn has_character_section(
        &self,
        character_id: CharacterId,
        section: CharacterSection,
    ) -> bool {
        self.character_section_get(character_id, section)
            .is_some_and(|s| !s.is_missing())
    }

    pub fn general_section_set(&self, section: GeneralSection, status: SectionStatus) {
        self.inner.write().general_sections.insert(section, status);
    }

    pub fn general_section_get(&self, section: GeneralSection) -> Option<SectionStatus> {
        self.inner.read().general_sections.get(&section).cloned()
    }

    pub fn has_general_section(&self, section: GeneralSection) -> bool {
        self.general_section_get(section)
            .is_some_and(|s| !s.is_missing())
    }

    /// Summarizes the update states of all sections of a character.
    pub fn character_section_summary(&self, character_id: CharacterId) -> StatusSummary {
        let now = Utc::now();
        let inner = self.inner.read();
        let mut summary = StatusSummary::default();
        for section in CharacterSection::ALL {
            summary.add(inner.character_sections.get(&(character_id, section)), now);
        }
        summary
    }

    /// Summarizes the update states of all sections of all characters and the general sections.
    pub fn summary(&self) -> StatusSummary {
        let now = Utc::now();
        let mut summary = StatusSummary::default();
        for character in self.list_characters() {
            summary.merge(self.character_section_summary(character.id));
        }
        let inner = self.inner.read();
        for section in [GeneralSection::MarketPrices, GeneralSection::Universe] {
            summary.add(inner.general_sections.get(&section), now);
        }
        summary
    }
}
