//! Jump clones of the current character with their implants, and when the next clone jump
//! is available.

use std::{convert::Infallible, fmt, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use futures::{future::BoxFuture, FutureExt};

use crate::{
    app::{
        context::AppContext,
        error::{tree::TreeError, Error},
        event::{AppEvent, CharacterSectionUpdated},
        tree::{TreeData, TreeNode},
        view::{
            actor::{Effect, ViewModel},
            label::{format_ago, format_duration, StatusLabel},
            ViewConfig,
        },
    },
    model::{
        Character, CharacterSection, Importance, JumpClone, LocationId, NextCloneJump,
        SolarSystemSecurityType,
    },
};

/// Interval for recomputing the time until the next clone jump.
pub const NEXT_JUMP_REFRESH: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpCloneNodeUid {
    pub clone_id: i64,
    /// Type of the implant, 0 for the clone itself.
    pub implant_type_id: i32,
}

impl fmt::Display for JumpCloneNodeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.clone_id, self.implant_type_id)
    }
}

/// A jump clone at the top level of the tree or one of its implants below it.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpCloneNode {
    pub clone_id: i64,
    pub implant_type_id: Option<i32>,
    pub name: String,
    pub location_id: LocationId,
    pub security_status: Option<f32>,
    pub implant_count: usize,
}

impl JumpCloneNode {
    fn clone_node(clone: &JumpClone) -> Self {
        let location = &clone.location;
        let security_status = location
            .solar_system
            .as_ref()
            .filter(|_| !location.name.is_empty())
            .map(|s| s.security_status);
        let name = match security_status {
            Some(_) => location.name.clone(),
            None => format!("Unknown location #{}", location.id),
        };
        Self {
            clone_id: clone.clone_id,
            implant_type_id: None,
            name,
            location_id: location.id,
            security_status,
            implant_count: clone.implants_count(),
        }
    }

    pub fn is_top(&self) -> bool {
        self.implant_type_id.is_none()
    }

    pub fn is_unknown(&self) -> bool {
        self.is_top() && self.security_status.is_none()
    }

    /// Security status of the clone's system, or "?" for unknown locations.
    pub fn security_display(&self) -> String {
        match self.security_status {
            Some(value) => format!("{:.1}", value),
            None => "?".to_string(),
        }
    }

    pub fn security_importance(&self) -> Importance {
        self.security_status
            .map(|v| SolarSystemSecurityType::from_value(v).importance())
            .unwrap_or(Importance::Low)
    }
}

impl TreeNode for JumpCloneNode {
    type Uid = JumpCloneNodeUid;

    fn uid(&self) -> JumpCloneNodeUid {
        JumpCloneNodeUid {
            clone_id: self.clone_id,
            implant_type_id: self.implant_type_id.unwrap_or(0),
        }
    }
}

/// Builds a tree with one root per clone and its implants as children.
pub fn build_jump_clone_tree(clones: &[JumpClone]) -> Result<TreeData<JumpCloneNode>, TreeError> {
    let mut tree = TreeData::new();
    for clone in clones {
        let uid = tree.add(None, JumpCloneNode::clone_node(clone))?;
        for implant in &clone.implants {
            tree.add(
                Some(&uid),
                JumpCloneNode {
                    clone_id: clone.clone_id,
                    implant_type_id: Some(implant.id),
                    name: implant.name.clone(),
                    location_id: clone.location.id,
                    security_status: None,
                    implant_count: 0,
                },
            )?;
        }
    }
    Ok(tree)
}

pub struct JumpCloneData {
    character: Character,
    tree: TreeData<JumpCloneNode>,
}

pub enum JumpClonesData {
    NoCharacter,
    Waiting,
    Loaded(Box<JumpCloneData>),
}

#[derive(Debug, Clone, Default)]
pub struct JumpClonesSnapshot {
    pub top: StatusLabel,
    /// "NOW", the remaining time or "?", shown once clones are loaded.
    pub next_jump: Option<StatusLabel>,
    pub last_jump: Option<String>,
    pub tree: Arc<TreeData<JumpCloneNode>>,
}

#[derive(Default)]
pub struct CharacterJumpClonesView {
    character: Option<Character>,
    tree: Arc<TreeData<JumpCloneNode>>,
    top: StatusLabel,
    next_jump: Option<StatusLabel>,
    last_jump: Option<String>,
}

impl CharacterJumpClonesView {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.character = None;
        self.tree = Arc::default();
        self.next_jump = None;
        self.last_jump = None;
    }

    fn update_jump_times(&mut self, now: DateTime<Utc>) {
        let Some(character) = &self.character else {
            return;
        };
        let next_jump = match character.next_clone_jump(now) {
            NextCloneJump::Unknown => StatusLabel::info("?"),
            NextCloneJump::Now => StatusLabel::new("NOW", Importance::Success),
            NextCloneJump::At(at) => {
                StatusLabel::new(format_duration(at - now), Importance::Danger)
            }
        };
        self.next_jump = Some(next_jump);
        self.last_jump = Some(match character.last_clone_jump_at {
            Some(at) => format_ago(at, now),
            None => "?".to_string(),
        });
    }
}

impl ViewModel for CharacterJumpClonesView {
    type Data = JumpClonesData;
    type Command = Infallible;
    type Snapshot = JumpClonesSnapshot;

    fn name(&self) -> &'static str {
        "character_jump_clones"
    }

    fn fetch(&self, ctx: &AppContext) -> BoxFuture<'static, Result<JumpClonesData, Error>> {
        let ctx = ctx.clone();
        async move {
            let Some(character_id) = ctx.current_character_id() else {
                return Ok(JumpClonesData::NoCharacter);
            };
            if !ctx
                .status
                .has_character_section(character_id, CharacterSection::JumpClones)
            {
                return Ok(JumpClonesData::Waiting);
            }
            let character = ctx.characters.get_character(character_id).await?;
            let clones = ctx.characters.list_jump_clones(character_id).await?;
            let tree = build_jump_clone_tree(&clones)?;
            Ok(JumpClonesData::Loaded(Box::new(JumpCloneData { character, tree })))
        }
        .boxed()
    }

    fn apply(
        &mut self,
        _kind: &'static str,
        result: Result<JumpClonesData, Error>,
        ctx: &AppContext,
    ) -> Effect<JumpClonesData> {
        self.clear();
        match result {
            Err(err) => self.top = StatusLabel::error(&err),
            Ok(JumpClonesData::NoCharacter) => self.top = StatusLabel::no_character(),
            Ok(JumpClonesData::Waiting) => self.top = StatusLabel::waiting(),
            Ok(JumpClonesData::Loaded(data)) => {
                if ctx.current_character_id() != Some(data.character.id) {
                    return Effect::Refresh;
                }
                let data = *data;
                self.top = StatusLabel::info(format!("{} clones", data.tree.roots().len()));
                self.character = Some(data.character);
                self.tree = Arc::new(data.tree);
                self.update_jump_times(Utc::now());
            }
        }
        Effect::None
    }

    fn handle(&mut self, command: Infallible, _ctx: &AppContext) -> Effect<JumpClonesData> {
        match command {}
    }

    fn on_event(&mut self, event: &AppEvent, ctx: &AppContext) -> Effect<JumpClonesData> {
        match event {
            AppEvent::CharacterSectionChanged(CharacterSectionUpdated {
                character_id,
                section: CharacterSection::JumpClones,
            }) if ctx.current_character_id() == Some(*character_id) => Effect::Refresh,
            _ => Effect::None,
        }
    }

    fn tick_interval(&self, _config: &ViewConfig) -> Option<Duration> {
        Some(NEXT_JUMP_REFRESH)
    }

    fn on_tick(&mut self, _ctx: &AppContext) -> Effect<JumpClonesData> {
        self.update_jump_times(Utc::now());
        Effect::None
    }

    fn snapshot(&self) -> JumpClonesSnapshot {
        JumpClonesSnapshot {
            top: self.top.clone(),
            next_jump: self.next_jump.clone(),
            last_jump: self.last_jump.clone(),
            tree: self.tree.clone(),
        }
    }
}
