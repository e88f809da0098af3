//! Pairwise and whole-team compatibility checks.
//!
//! A candidate fits a team when its home slot is free, no current member
//! shares its display name, and no current member shares a skill other
//! than the reserved one. The reserved skill (`"dps"`) is the deliberate
//! exception: every guardian may carry it, so it never blocks a pairing.

use crate::catalog::{Direction, Guardian, RESERVED_SKILL};
use crate::team::Team;

/// True iff one of `candidate`'s non-reserved skills is already present on
/// some team member.
///
/// The check pools the skills of all current members, so a conflict with
/// any one of them counts. Reserved entries in the candidate's list are
/// skipped before the lookup; an overlap on `"dps"` alone never conflicts.
pub fn skill_overlap(candidate: &Guardian, team: &Team) -> bool {
    let mut team_skills: Vec<&str> = Vec::new();
    for member in team.members() {
        team_skills.extend(member.skills.iter().map(String::as_str));
    }
    candidate
        .skills
        .iter()
        .map(String::as_str)
        .filter(|skill| *skill != RESERVED_SKILL)
        .any(|skill| team_skills.contains(&skill))
}

/// Whether `candidate` may join the team as it stands.
///
/// Checked in order, first failure wins:
/// 1. the candidate's home slot is already occupied
/// 2. a current member carries the same display name (the same guardian
///    listed under two catalog ids is still one guardian)
/// 3. a non-reserved skill overlaps with a current member
///
/// An empty team accepts any candidate.
pub fn can_fit(team: &Team, candidate: &Guardian) -> bool {
    if team.slot(candidate.direction).is_some() {
        return false;
    }
    if team.members().any(|member| member.name == candidate.name) {
        return false;
    }
    !skill_overlap(candidate, team)
}

/// Whether every member would still be accepted by the rest of the team.
///
/// Removes each member in turn and re-offers it via [`can_fit`]. Assembly
/// only ever adds members that fit, so its output always passes; the check
/// exists for teams built by hand or loaded from elsewhere.
pub fn team_is_fit(team: &Team) -> bool {
    for direction in Direction::ALL {
        if let Some(member) = team.slot(direction) {
            let mut rest = team.clone();
            rest.clear(direction);
            if !can_fit(&rest, member) {
                return false;
            }
        }
    }
    true
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

    fn team_of(members: &[Guardian]) -> Team {
        let mut team = Team::default();
        for member in members {
            team.set(member.clone());
        }
        team
    }

    #[test]
    fn empty_team_accepts_anyone() {
        let team = Team::default();
        let candidate = guardian("Ash", Direction::King, &["ember", "dps"]);
        assert!(can_fit(&team, &candidate));
    }

    #[test]
    fn occupied_slot_rejects() {
        let team = team_of(&[guardian("Ash", Direction::King, &[])]);
        let rival = guardian("Brook", Direction::King, &[]);
        assert!(!can_fit(&team, &rival));
    }

    #[test]
    fn same_name_rejects_across_slots() {
        // Same guardian listed under two catalog ids, different directions.
        let team = team_of(&[guardian("Ash", Direction::King, &[])]);
        let double = guardian("Ash", Direction::Rook, &[]);
        assert!(!can_fit(&team, &double));
    }

    #[test]
    fn shared_skill_rejects() {
        let team = team_of(&[guardian("Ash", Direction::King, &["ember"])]);
        let rival = guardian("Brook", Direction::Rook, &["ember"]);
        assert!(!can_fit(&team, &rival));
    }

    #[test]
    fn disjoint_skills_fit() {
        let team = team_of(&[guardian("Ash", Direction::King, &["ember"])]);
        let ally = guardian("Brook", Direction::Rook, &["tide"]);
        assert!(can_fit(&team, &ally));
    }

    #[test]
    fn reserved_skill_never_conflicts() {
        let team = team_of(&[guardian("Ash", Direction::King, &["ember", "dps"])]);
        let ally = guardian("Brook", Direction::Rook, &["tide", "dps"]);
        assert!(!skill_overlap(&ally, &team));
        assert!(can_fit(&team, &ally));
    }

    #[test]
    fn dps_only_candidate_always_fits() {
        // Entire skill list is the reserved skill, even against a team
        // that already carries it.
        let team = team_of(&[
            guardian("Ash", Direction::King, &["dps"]),
            guardian("Brook", Direction::Rook, &["tide", "dps"]),
        ]);
        let candidate = guardian("Cinder", Direction::Queen, &["dps"]);
        assert!(!skill_overlap(&candidate, &team));
        assert!(can_fit(&team, &candidate));
    }

    #[test]
    fn reserved_plus_shared_skill_still_rejects() {
        let team = team_of(&[guardian("Ash", Direction::King, &["ember", "dps"])]);
        let rival = guardian("Brook", Direction::Rook, &["ember", "dps"]);
        assert!(skill_overlap(&rival, &team));
        assert!(!can_fit(&team, &rival));
    }

    #[test]
    fn overlap_pools_all_members() {
        // The conflicting skill sits on the second member, not the first.
        let team = team_of(&[
            guardian("Ash", Direction::King, &["ember"]),
            guardian("Brook", Direction::Rook, &["tide"]),
        ]);
        let rival = guardian("Cinder", Direction::Queen, &["tide"]);
        assert!(skill_overlap(&rival, &team));
        assert!(!can_fit(&team, &rival));
    }

    #[test]
    fn skilless_candidate_never_overlaps() {
        let team = team_of(&[guardian("Ash", Direction::King, &["ember"])]);
        let blank = guardian("Brook", Direction::Rook, &[]);
        assert!(!skill_overlap(&blank, &team));
        assert!(can_fit(&team, &blank));
    }

    #[test]
    fn fit_team_passes_whole_team_check() {
        let team = team_of(&[
            guardian("Ash", Direction::King, &["ember"]),
            guardian("Brook", Direction::Rook, &["tide", "dps"]),
            guardian("Cinder", Direction::Queen, &["gale", "dps"]),
        ]);
        assert!(team_is_fit(&team));
    }

    #[test]
    fn hand_built_conflict_fails_whole_team_check() {
        // Assembly would never produce this pairing; build it directly.
        let team = team_of(&[
            guardian("Ash", Direction::King, &["ember"]),
            guardian("Brook", Direction::Rook, &["ember"]),
        ]);
        assert!(!team_is_fit(&team));
    }

    #[test]
    fn duplicate_name_fails_whole_team_check() {
        let team = team_of(&[
            guardian("Ash", Direction::King, &[]),
            guardian("Ash", Direction::Rook, &[]),
        ]);
        assert!(!team_is_fit(&team));
    }

    #[test]
    fn empty_team_is_fit() {
        assert!(team_is_fit(&Team::default()));
    }
}
