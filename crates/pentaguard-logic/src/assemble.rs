//! Randomized greedy team assembly.
//!
//! One shuffled pass over the eligible guardians, placing each one the
//! team accepts. There is no backtracking and no scoring here: a pass that
//! paints itself into a corner simply returns an incomplete team, and the
//! caller retries with a fresh permutation.
//!
//! The RNG is injected so callers choose the trade-off: seed it for
//! reproducible output, or draw from entropy for variety.
//!
//! ```
//! use std::collections::BTreeMap;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use pentaguard_logic::assemble::find_team;
//! use pentaguard_logic::catalog::{Catalog, Direction, Guardian};
//!
//! let mut guardians = BTreeMap::new();
//! guardians.insert(
//!     "flint".to_string(),
//!     Guardian {
//!         name: "Flint".to_string(),
//!         direction: Direction::King,
//!         skills: Vec::new(),
//!     },
//! );
//! let catalog = Catalog::new(guardians, BTreeMap::new());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let team = find_team(&catalog, None, &mut rng);
//! assert_eq!(team.king.as_ref().map(|g| g.name.as_str()), Some("Flint"));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Guardian};
use crate::fit::can_fit;
use crate::team::Team;

/// Assemble one team from `catalog`, optionally restricted to the catalog
/// ids in `pool`.
///
/// Pool ids with no catalog entry are ignored. `Some(&[])` means an empty
/// pool and yields an empty team; `None` draws from the whole catalog.
///
/// The pass visits a uniform shuffle of the eligible guardians once and
/// places each one that [`can_fit`] accepts, so a filled slot is never
/// reassigned. The result may be incomplete; callers wanting a complete,
/// unseen team gate on [`crate::team::is_valid`] and call again.
pub fn find_team(catalog: &Catalog, pool: Option<&[String]>, rng: &mut impl Rng) -> Team {
    let mut eligible: Vec<&Guardian> = match pool {
        Some(ids) => catalog
            .guardians
            .iter()
            .filter(|(id, _)| ids.contains(*id))
            .map(|(_, guardian)| guardian)
            .collect(),
        None => catalog.guardians.values().collect(),
    };
    eligible.shuffle(rng);

    let mut team = Team::default();
    for guardian in eligible {
        if can_fit(&team, guardian) {
            team.set(guardian.clone());
        }
    }
    team
}
