use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    id::CharacterId,
    universe::{EveLocation, EveType},
};

/// An EVE Online character owned by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub corporation_name: String,
    #[serde(default)]
    pub location: Option<EveLocation>,
    #[serde(default)]
    pub ship: Option<EveType>,
    #[serde(default)]
    pub last_clone_jump_at: Option<DateTime<Utc>>,
    /// Trained level of Infomorph Synchronizing, which shortens the clone jump cooldown.
    #[serde(default)]
    pub infomorph_synchronizing: u8,
    /// User defined tags for grouping characters.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Base cooldown between two clone jumps in hours. Each skill level takes off one hour.
const CLONE_JUMP_COOLDOWN_HOURS: i64 = 24;

/// When a character can make the next clone jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextCloneJump {
    /// The last jump is not known.
    Unknown,
    Now,
    At(DateTime<Utc>),
}

impl Character {
    pub fn next_clone_jump(&self, now: DateTime<Utc>) -> NextCloneJump {
        let Some(last_jump) = self.last_clone_jump_at else {
            return NextCloneJump::Unknown;
        };
        let level = i64::from(self.infomorph_synchronizing.min(5));
        let next = last_jump + Duration::hours(CLONE_JUMP_COOLDOWN_HOURS - level);
        if next <= now {
            NextCloneJump::Now
        } else {
            NextCloneJump::At(next)
        }
    }
}

/// Short reference to a character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterShort {
    pub id: CharacterId,
    pub name: String,
}

impl From<&Character> for CharacterShort {
    fn from(value: &Character) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

/// A jump clone of a character, stored at a location with its own implant set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpClone {
    pub clone_id: i64,
    pub character: CharacterShort,
    pub location: EveLocation,
    #[serde(default)]
    pub implants: Vec<EveType>,
}

impl JumpClone {
    pub fn implants_count(&self) -> usize {
        self.implants.len()
    }
}
