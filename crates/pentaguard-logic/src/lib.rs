//! Pure team assembly logic for Pentaguard.
//!
//! This crate contains all assembly logic that is independent of any file
//! format, CLI, or runtime. Functions take plain data (a catalog, a team,
//! a random source) and return results, making them unit-testable and
//! portable across the finder binary and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`assemble`] | Randomized single-pass greedy team construction |
//! | [`catalog`] | Guardian/skill catalogs, directions, listing, integrity checks |
//! | [`fit`] | Pairwise and whole-team compatibility predicates |
//! | [`power`] | Team strength scoring against the skill catalog |
//! | [`team`] | Direction-keyed slots, fingerprints, the accept gate |

pub mod assemble;
pub mod catalog;
pub mod fit;
pub mod power;
pub mod team;
