use evebuddy_test_utils::prelude::*;

mod memory;
mod snapshot;
