// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod keys;
pub mod model;
pub mod state;

pub use catalog::*;
pub use keys::*;
pub use model::*;
pub use state::*;
