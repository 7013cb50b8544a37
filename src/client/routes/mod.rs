pub mod assets;
pub mod clones;
pub mod jump_clones;
pub mod locations;
pub mod not_found;

pub use assets::Assets;
pub use clones::Clones;
pub use jump_clones::JumpClones;
pub use locations::Locations;
pub use not_found::NotFound;
