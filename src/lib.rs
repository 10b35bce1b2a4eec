//! tiermap: an integer-keyed map that splits storage across two tiers.
//!
//! Keys whose unsigned value is below the current array capacity live in a
//! dense value buffer and are served by one indexed load; every other key
//! (negative, or beyond the array) lives in a linear-probing hash table
//! with sentinel-marked cells. Capacity growth re-plans both tiers jointly
//! from a bit-width histogram of the stored keys and migrates entries
//! between tiers, so workloads keyed by mostly-small IDs keep array-speed
//! access without giving up arbitrary integer keys.
//!
//! [`MirrorMap`] is a `hashbrown`-backed reference container with the same
//! method surface, used as the oracle by the differential tests and as the
//! baseline by the benchmarks.

mod mirror_map;
mod tier_map;
mod traits;


pub use mirror_map::MirrorMap;
pub use tier_map::{Iter, TierMap};
pub use traits::{TierKey, TierValue};
