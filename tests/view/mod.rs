use evebuddy_test_utils::prelude::*;

mod assets;
mod clones;
mod jump_clones;
mod locations;
