//! Team strength scoring against the skill catalog.

use crate::catalog::{Catalog, CatalogError};
use crate::team::Team;

/// Total power of a team: the catalog weight of every skill listed on
/// every filled slot, summed. A skill listed twice counts twice, and the
/// reserved skill scores like any other. Empty slots contribute nothing.
///
/// A skill id the catalog does not define is a data-integrity fault, not a
/// scoring outcome: the sum is abandoned on the first one rather than
/// returned partially counted. Catalogs that pass
/// [`crate::catalog::validate_catalog`] can never hit this.
pub fn team_power(team: &Team, catalog: &Catalog) -> Result<f32, CatalogError> {
    let mut total = 0.0;
    for member in team.members() {
        for skill in &member.skills {
            match catalog.skill_power(skill) {
                Some(power) => total += power,
                None => {
                    return Err(CatalogError::UnknownSkill {
                        guardian: member.name.clone(),
                        skill: skill.clone(),
                    })
                }
            }
        }
    }
    Ok(total)
}
