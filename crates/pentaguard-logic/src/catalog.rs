//! Guardian and skill catalogs, the immutable inputs to every other module.
//!
//! Catalogs are plain data handed in by the caller. Nothing here reads
//! files or parses a document format; the finder binary owns that and
//! passes the result down as [`Catalog`].
//!
//! `BTreeMap` keys the collections so iteration order is stable. Assembly
//! shuffles with a caller-supplied RNG, and a seeded RNG only reproduces
//! the same team if the pre-shuffle ordering never changes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill id exempt from the overlap rule. Any number of team members may
/// carry it.
pub const RESERVED_SKILL: &str = "dps";

/// One of the five team slots. Every guardian is tied to exactly one
/// direction and can only ever occupy that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Knight,
    Queen,
    King,
    Rook,
    Bishop,
}

impl Direction {
    /// All directions in canonical order. Slot iteration and fingerprints
    /// follow this order.
    pub const ALL: [Direction; 5] = [
        Direction::Knight,
        Direction::Queen,
        Direction::King,
        Direction::Rook,
        Direction::Bishop,
    ];

    /// Lowercase name as it appears in catalog documents and fingerprints.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Knight => "knight",
            Direction::Queen => "queen",
            Direction::King => "king",
            Direction::Rook => "rook",
            Direction::Bishop => "bishop",
        }
    }
}

/// A guardian as listed in the catalog.
///
/// Two catalog entries with the same `name` are treated as the same
/// guardian by the fit checks, whatever their catalog ids are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    /// Display name, also the identity used by the fit checks.
    pub name: String,
    /// Home slot. Assembly never places a guardian anywhere else.
    pub direction: Direction,
    /// Skill ids in listing order. May be empty, may repeat.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A skill's scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub power: f32,
}

/// Immutable guardian and skill collections, keyed by catalog id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub guardians: BTreeMap<String, Guardian>,
    pub skills: BTreeMap<String, Skill>,
}

impl Catalog {
    /// Bundle two already-parsed documents into one catalog.
    pub fn new(guardians: BTreeMap<String, Guardian>, skills: BTreeMap<String, Skill>) -> Self {
        Self { guardians, skills }
    }

    /// Look up a guardian by catalog id.
    pub fn guardian(&self, id: &str) -> Option<&Guardian> {
        self.guardians.get(id)
    }

    /// Scoring weight of a skill, if the skill catalog knows it.
    pub fn skill_power(&self, id: &str) -> Option<f32> {
        self.skills.get(id).map(|skill| skill.power)
    }
}

/// Read-only listing row for display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardianSummary {
    pub id: String,
    pub name: String,
    pub direction: Direction,
}

/// Project the guardian catalog into listing rows, in catalog-id order.
pub fn list_guardians(catalog: &Catalog) -> Vec<GuardianSummary> {
    catalog
        .guardians
        .iter()
        .map(|(id, guardian)| GuardianSummary {
            id: id.clone(),
            name: guardian.name.clone(),
            direction: guardian.direction,
        })
        .collect()
}

/// Catalog integrity fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A guardian lists a skill id the skill catalog does not define.
    UnknownSkill { guardian: String, skill: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownSkill { guardian, skill } => {
                write!(f, "guardian '{}' lists unknown skill '{}'", guardian, skill)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Check every guardian's skill list against the skill catalog.
///
/// Returns all violations rather than stopping at the first, so a caller
/// can report the full damage in one pass. An empty result means scoring
/// can never fail for teams drawn from this catalog.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    for guardian in catalog.guardians.values() {
        for skill in &guardian.skills {
            if !catalog.skills.contains_key(skill) {
                errors.push(CatalogError::UnknownSkill {
                    guardian: guardian.name.clone(),
                    skill: skill.clone(),
                });
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guardian(name: &str, direction: Direction, skills: &[&str]) -> Guardian {
        Guardian {
            name: name.to_string(),
            direction,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn small_catalog() -> Catalog {
        let mut guardians = BTreeMap::new();
        guardians.insert("ash".to_string(), guardian("Ash", Direction::Knight, &["ember"]));
        guardians.insert("brook".to_string(), guardian("Brook", Direction::Queen, &["tide", "dps"]));
        let mut skills = BTreeMap::new();
        skills.insert("ember".to_string(), Skill { power: 3.0 });
        skills.insert("tide".to_string(), Skill { power: 2.0 });
        skills.insert("dps".to_string(), Skill { power: 1.0 });
        Catalog::new(guardians, skills)
    }

    #[test]
    fn all_directions_in_canonical_order() {
        assert_eq!(Direction::ALL.len(), 5);
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["knight", "queen", "king", "rook", "bishop"]);
    }

    #[test]
    fn guardian_lookup_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.guardian("ash").map(|g| g.name.as_str()), Some("Ash"));
        assert!(catalog.guardian("nobody").is_none());
    }

    #[test]
    fn skill_power_lookup() {
        let catalog = small_catalog();
        assert_eq!(catalog.skill_power("ember"), Some(3.0));
        assert!(catalog.skill_power("void").is_none());
    }

    #[test]
    fn listing_projects_id_name_direction() {
        let rows = list_guardians(&small_catalog());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "ash");
        assert_eq!(rows[0].name, "Ash");
        assert_eq!(rows[0].direction, Direction::Knight);
        assert_eq!(rows[1].id, "brook");
    }

    #[test]
    fn listing_follows_catalog_id_order() {
        let mut catalog = small_catalog();
        catalog
            .guardians
            .insert("aard".to_string(), guardian("Aard", Direction::Rook, &[]));
        let rows = list_guardians(&catalog);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        // BTreeMap order, not insertion order
        assert_eq!(ids, ["aard", "ash", "brook"]);
    }

    #[test]
    fn clean_catalog_validates_empty() {
        assert!(validate_catalog(&small_catalog()).is_empty());
    }

    #[test]
    fn validation_reports_every_unknown_skill() {
        let mut catalog = small_catalog();
        catalog.guardians.insert(
            "cinder".to_string(),
            guardian("Cinder", Direction::King, &["smoke", "ash_cloud"]),
        );
        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            CatalogError::UnknownSkill {
                guardian: "Cinder".to_string(),
                skill: "smoke".to_string(),
            }
        );
        assert_eq!(
            errors[1],
            CatalogError::UnknownSkill {
                guardian: "Cinder".to_string(),
                skill: "ash_cloud".to_string(),
            }
        );
    }

    #[test]
    fn error_display_names_guardian_and_skill() {
        let err = CatalogError::UnknownSkill {
            guardian: "Cinder".to_string(),
            skill: "smoke".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Cinder"), "display should name the guardian: {}", text);
        assert!(text.contains("smoke"), "display should name the skill: {}", text);
    }
}
