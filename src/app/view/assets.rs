//! Asset browser of the current character: a location tree and a grid of assets.

use std::{collections::HashMap, sync::Arc};

use futures::FutureExt;

use crate::{
    app::{
        asset::{
            assets_for_node, build_location_tree, AssetCollection, LocationNode, LocationNodeUid,
        },
        context::AppContext,
        error::Error,
        event::{AppEvent, CharacterSectionUpdated},
        tree::TreeData,
        view::{
            actor::{Effect, ViewModel},
            label::{format_count, format_short, StatusLabel},
        },
    },
    model::{Character, CharacterAsset, CharacterId, CharacterSection, GeneralSection},
};

/// Loaded asset data of a character.
pub struct AssetData {
    character_id: CharacterId,
    collection: AssetCollection,
    tree: TreeData<LocationNode>,
}

pub enum AssetsData {
    NoCharacter,
    Waiting,
    Loaded(Box<AssetData>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetsCommand {
    /// Selects a node of the location tree and shows its assets.
    SelectNode(LocationNodeUid),
    /// Selects the tree node of a location, ship or container, e.g. after a click in the grid.
    SelectContainer(i64),
    ClearSelection,
}

#[derive(Debug, Clone, Default)]
pub struct AssetsSnapshot {
    pub top: StatusLabel,
    pub tree: Arc<TreeData<LocationNode>>,
    pub selected: Option<LocationNodeUid>,
    /// Ancestors of the selected node, root first, followed by the node itself.
    pub path: Vec<LocationNode>,
    pub assets: Vec<CharacterAsset>,
    pub bottom: String,
}

#[derive(Default)]
pub struct CharacterAssetsView {
    collection: AssetCollection,
    tree: Arc<TreeData<LocationNode>>,
    container_nodes: HashMap<i64, LocationNodeUid>,
    selected: Option<LocationNodeUid>,
    assets: Vec<CharacterAsset>,
    top: StatusLabel,
}

impl CharacterAssetsView {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.collection = AssetCollection::default();
        self.tree = Arc::default();
        self.container_nodes.clear();
        self.selected = None;
        self.assets.clear();
    }

    fn select(&mut self, uid: LocationNodeUid) {
        let Some(node) = self.tree.node(&uid) else {
            return;
        };
        self.assets = assets_for_node(&self.collection, node);
        self.selected = Some(uid);
    }

    fn bottom(&self) -> String {
        if self.selected.is_none() {
            return String::new();
        }
        let total: f64 = self
            .assets
            .iter()
            .map(|a| a.price.unwrap_or(0.0) * f64::from(a.quantity))
            .sum();
        format!(
            "{} Items - {} ISK Est. Price",
            self.assets.len(),
            format_short(total)
        )
    }
}

impl ViewModel for CharacterAssetsView {
    type Data = AssetsData;
    type Command = AssetsCommand;
    type Snapshot = AssetsSnapshot;

    fn name(&self) -> &'static str {
        "character_assets"
    }

    fn fetch(
        &self,
        ctx: &AppContext,
    ) -> futures::future::BoxFuture<'static, Result<AssetsData, Error>> {
        let ctx = ctx.clone();
        async move {
            let Some(character_id) = ctx.current_character_id() else {
                return Ok(AssetsData::NoCharacter);
            };
            if !ctx
                .status
                .has_character_section(character_id, CharacterSection::Assets)
            {
                return Ok(AssetsData::Waiting);
            }
            let assets = ctx.characters.list_assets(character_id).await?;
            let locations = ctx.universe.list_locations().await?;
            let collection = AssetCollection::new(assets, locations);
            let tree = build_location_tree(&collection, character_id)?;
            Ok(AssetsData::Loaded(Box::new(AssetData {
                character_id,
                collection,
                tree,
            })))
        }
        .boxed()
    }

    fn apply(
        &mut self,
        _kind: &'static str,
        result: Result<AssetsData, Error>,
        ctx: &AppContext,
    ) -> Effect<AssetsData> {
        self.clear();
        match result {
            Err(err) => self.top = StatusLabel::error(&err),
            Ok(AssetsData::NoCharacter) => self.top = StatusLabel::no_character(),
            Ok(AssetsData::Waiting) => self.top = StatusLabel::waiting(),
            Ok(AssetsData::Loaded(data)) => {
                if ctx.current_character_id() != Some(data.character_id) {
                    return Effect::Refresh;
                }
                let data = *data;
                self.top = StatusLabel::info(format!(
                    "{} items",
                    format_count(data.collection.item_count_filtered_total())
                ));
                self.container_nodes = data
                    .tree
                    .all()
                    .into_iter()
                    .filter(|(_, n)| n.variant.is_container_like())
                    .map(|(_, n)| (n.container_id, n.uid()))
                    .collect();
                self.collection = data.collection;
                self.tree = Arc::new(data.tree);
            }
        }
        Effect::None
    }

    fn handle(&mut self, command: AssetsCommand, _ctx: &AppContext) -> Effect<AssetsData> {
        match command {
            AssetsCommand::SelectNode(uid) => self.select(uid),
            AssetsCommand::SelectContainer(container_id) => {
                if let Some(uid) = self.container_nodes.get(&container_id).copied() {
                    self.select(uid);
                }
            }
            AssetsCommand::ClearSelection => {
                self.selected = None;
                self.assets.clear();
            }
        }
        Effect::None
    }

    fn on_event(&mut self, event: &AppEvent, ctx: &AppContext) -> Effect<AssetsData> {
        match event {
            AppEvent::CharacterSectionChanged(CharacterSectionUpdated {
                character_id,
                section: CharacterSection::Assets,
            }) if ctx.current_character_id() == Some(*character_id) => Effect::Refresh,
            AppEvent::GeneralSectionChanged(GeneralSection::MarketPrices) => Effect::Refresh,
            _ => Effect::None,
        }
    }

    fn on_character(&mut self, _character: Option<&Character>) -> Effect<AssetsData> {
        Effect::Refresh
    }

    fn snapshot(&self) -> AssetsSnapshot {
        let path = match &self.selected {
            Some(uid) => self
                .tree
                .path(uid)
                .into_iter()
                .chain(std::iter::once(uid))
                .filter_map(|u| self.tree.node(u).cloned())
                .collect(),
            None => Vec::new(),
        };
        AssetsSnapshot {
            top: self.top.clone(),
            tree: self.tree.clone(),
            selected: self.selected,
            path,
            assets: self.assets.clone(),
            bottom: self.bottom(),
        }
    }
}
