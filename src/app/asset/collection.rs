//! Containment graph of a character's assets.
//!
//! ESI reports assets as a flat list where each asset points to its parent through
//! `location_id`. The parent is either a location (station, structure, solar system) or
//! another asset (ship, container, asset safety wrap). [`AssetCollection`] resolves these
//! references into one tree per location.

use std::collections::{HashMap, HashSet};

use crate::model::{CharacterAsset, EveLocation, ItemId, LocationId};

/// Index of a node in an [`AssetCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Location(EveLocation),
    Asset(CharacterAsset),
}

/// A node of an asset tree: a location at the root, assets below.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn asset(&self) -> Option<&CharacterAsset> {
        match &self.kind {
            NodeKind::Asset(asset) => Some(asset),
            NodeKind::Location(_) => None,
        }
    }

    pub fn location(&self) -> Option<&EveLocation> {
        match &self.kind {
            NodeKind::Location(location) => Some(location),
            NodeKind::Asset(_) => None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Collection of assets structured as one tree per location.
#[derive(Debug, Clone, Default)]
pub struct AssetCollection {
    nodes: Vec<Node>,
    locations: Vec<NodeId>,
    by_item: HashMap<ItemId, NodeId>,
    by_location: HashMap<LocationId, NodeId>,
}

impl AssetCollection {
    /// Builds the asset trees from flat assets and known locations.
    ///
    /// A location becomes a root when at least one asset points to it directly. Assets
    /// pointing to an unknown location which is not another asset are dropped, together with
    /// their contents.
    ///
    /// # Arguments
    /// - `assets` - Assets of one or more characters
    /// - `locations` - Known locations, usually all locations of the local universe data
    pub fn new(assets: Vec<CharacterAsset>, locations: Vec<EveLocation>) -> Self {
        let mut known: HashMap<LocationId, EveLocation> =
            locations.into_iter().map(|l| (l.id, l)).collect();
        let item_ids: HashSet<ItemId> = assets.iter().map(|a| a.item_id).collect();

        let mut collection = Self::default();

        for asset in &assets {
            let parent_is_item = item_ids.contains(&ItemId::from(asset.location_id));
            if parent_is_item || collection.by_location.contains_key(&asset.location_id) {
                continue;
            }
            if let Some(location) = known.remove(&asset.location_id) {
                let id = collection.push(NodeKind::Location(location), None);
                collection.by_location.insert(asset.location_id, id);
                collection.locations.push(id);
            }
        }

        let mut remaining = Vec::with_capacity(assets.len());
        for asset in assets {
            match collection.by_location.get(&asset.location_id).copied() {
                Some(parent) => collection.attach(parent, asset),
                None => remaining.push(asset),
            }
        }

        // Each pass attaches every asset whose parent asset is already in the tree.
        loop {
            let before = remaining.len();
            let mut pending = Vec::with_capacity(before);
            for asset in remaining {
                let parent = collection
                    .by_item
                    .get(&ItemId::from(asset.location_id))
                    .copied();
                match parent {
                    Some(parent) => collection.attach(parent, asset),
                    None => pending.push(asset),
                }
            }
            remaining = pending;
            if remaining.is_empty() || remaining.len() == before {
                break;
            }
        }

        collection
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn attach(&mut self, parent: NodeId, asset: CharacterAsset) {
        let item_id = asset.item_id;
        let id = self.push(NodeKind::Asset(asset), Some(parent));
        self.by_item.insert(item_id, id);
    }

    /// Returns the root nodes, one per location.
    pub fn location_nodes(&self) -> &[NodeId] {
        &self.locations
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns the node of an asset.
    pub fn node(&self, item_id: ItemId) -> Option<NodeId> {
        self.by_item.get(&item_id).copied()
    }

    pub fn location_node(&self, location_id: LocationId) -> Option<NodeId> {
        self.by_location.get(&location_id).copied()
    }

    pub fn asset(&self, item_id: ItemId) -> Option<&CharacterAsset> {
        self.node(item_id)
            .and_then(|id| self.get(id))
            .and_then(Node::asset)
    }

    /// Returns the location an asset is ultimately stored at.
    pub fn root_location(&self, item_id: ItemId) -> Option<&EveLocation> {
        let id = self.node(item_id)?;
        let root = self.path(id).into_iter().next().unwrap_or(id);
        self.get(root).and_then(Node::location)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns the assets directly below a node in insertion order.
    pub fn child_assets(&self, id: NodeId) -> impl Iterator<Item = &CharacterAsset> {
        self.children(id)
            .iter()
            .filter_map(|c| self.get(*c))
            .filter_map(Node::asset)
    }

    /// Returns the ancestors of a node, root location first.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).and_then(Node::parent);
        while let Some(parent) = current {
            path.push(parent);
            current = self.get(parent).and_then(Node::parent);
        }
        path.reverse();
        path
    }

    /// Returns the total quantity of all assets in a sub tree, including the root asset.
    pub fn item_count_any(&self, id: NodeId) -> i64 {
        let Some(node) = self.get(id) else {
            return 0;
        };
        let own = node.asset().map_or(0, |a| i64::from(a.quantity));
        own + node
            .children
            .iter()
            .map(|c| self.item_count_any(*c))
            .sum::<i64>()
    }

    /// Returns the total quantity of a sub tree, excluding items stored inside ships.
    pub fn item_count_filtered(&self, id: NodeId) -> i64 {
        let Some(node) = self.get(id) else {
            return 0;
        };
        let own = match node.asset() {
            Some(asset) if is_in_ship(asset) => return 0,
            Some(asset) => i64::from(asset.quantity),
            None => 0,
        };
        own + node
            .children
            .iter()
            .map(|c| self.item_count_filtered(*c))
            .sum::<i64>()
    }

    /// Returns the filtered item count over all locations.
    pub fn item_count_filtered_total(&self) -> i64 {
        self.locations
            .iter()
            .map(|l| self.item_count_filtered(*l))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn is_in_ship(asset: &CharacterAsset) -> bool {
    asset.is_fitted()
        || asset.is_in_drone_bay()
        || asset.is_in_frigate_escape_bay()
        || asset.is_in_fighter_bay()
        || asset.is_in_fuel_bay()
        || asset.is_in_any_cargo_hold()
}
