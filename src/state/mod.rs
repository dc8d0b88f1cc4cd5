// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bookkeeping shared by all searches.

pub mod statistics;

pub use statistics::{Counters, Statistics};
