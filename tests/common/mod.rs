#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::{assert_finite, assert_opposes};
pub use fixtures::*;
