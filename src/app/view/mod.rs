//! View models of the GUI, each running as an actor.

pub mod actor;
pub mod assets;
pub mod clones;
pub mod config;
pub mod jump_clones;
pub mod label;
pub mod locations;

pub use actor::{spawn_view, Effect, ViewHandle, ViewModel};
pub use assets::CharacterAssetsView;
pub use clones::CloneSearchView;
pub use config::ViewConfig;
pub use jump_clones::CharacterJumpClonesView;
pub use label::StatusLabel;
pub use locations::CharacterLocationsView;
