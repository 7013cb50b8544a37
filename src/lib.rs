#![allow(non_snake_case)]

pub mod app;
pub mod client;
pub mod model;
