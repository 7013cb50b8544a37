//! Asset containment graph and the location tree built from it.

pub mod collection;
pub mod location_tree;

pub use collection::{AssetCollection, Node, NodeId, NodeKind};
pub use location_tree::{
    assets_for_node, build_location_tree, LocationNode, LocationNodeUid, LocationNodeVariant,
};
