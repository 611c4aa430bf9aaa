//! Static descriptive content for each of the eight personality types.

mod profiles;

use std::collections::HashSet;

use serde::Serialize;

use super::domain::PersonalityType;

/// Types grouped by how well they pair with the owning profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub perfect: Vec<PersonalityType>,
    pub good: Vec<PersonalityType>,
    pub growth: Vec<PersonalityType>,
}

impl Compatibility {
    pub fn all(&self) -> impl Iterator<Item = PersonalityType> + '_ {
        self.perfect
            .iter()
            .chain(&self.good)
            .chain(&self.growth)
            .copied()
    }
}

/// Catalog entry for a single type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProfile {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub careers: Vec<&'static str>,
    pub notable_examples: Vec<&'static str>,
    pub compatibility: Compatibility,
}

/// Exhaustive, validated lookup from [`PersonalityType`] to [`TypeProfile`].
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    // indexed by PersonalityType::index
    profiles: Vec<TypeProfile>,
}

impl TypeCatalog {
    pub fn from_profiles(profiles: Vec<TypeProfile>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<TypeProfile>> = vec![None; PersonalityType::COUNT];

        for profile in profiles {
            let ty = profile.personality_type;
            validate_compatibility(&profile)?;
            let slot = &mut slots[ty.index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate(ty));
            }
            *slot = Some(profile);
        }

        let profiles = PersonalityType::all()
            .into_iter()
            .zip(slots)
            .map(|(ty, slot)| slot.ok_or(CatalogError::Missing(ty)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { profiles })
    }

    /// Built-in catalog content.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_profiles(profiles::standard_profiles())
    }

    pub fn profile(&self, personality_type: PersonalityType) -> &TypeProfile {
        &self.profiles[personality_type.index()]
    }

    pub fn profiles(&self) -> &[TypeProfile] {
        &self.profiles
    }
}

fn validate_compatibility(profile: &TypeProfile) -> Result<(), CatalogError> {
    let owner = profile.personality_type;
    let mut seen = HashSet::new();
    for other in profile.compatibility.all() {
        if other == owner {
            return Err(CatalogError::SelfCompatibility(owner));
        }
        if !seen.insert(other) {
            return Err(CatalogError::DuplicateCompatibility { owner, other });
        }
    }
    Ok(())
}

/// Integrity fault in catalog content. Surfaced at startup, never per request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no profile for type {0}")]
    Missing(PersonalityType),
    #[error("catalog lists type {0} more than once")]
    Duplicate(PersonalityType),
    #[error("profile {0} lists itself as compatible")]
    SelfCompatibility(PersonalityType),
    #[error("profile {owner} lists {other} in more than one compatibility slot")]
    DuplicateCompatibility {
        owner: PersonalityType,
        other: PersonalityType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TypeCatalog {
        TypeCatalog::standard().expect("standard catalog valid")
    }

    #[test]
    fn every_type_resolves_to_its_own_profile() {
        let catalog = catalog();
        for ty in PersonalityType::all() {
            let profile = catalog.profile(ty);
            assert_eq!(profile.personality_type, ty);
            assert!(!profile.name.is_empty());
            assert!(!profile.strengths.is_empty());
            assert!(!profile.careers.is_empty());
        }
    }

    #[test]
    fn perfect_matches_are_mutual() {
        let catalog = catalog();
        for profile in catalog.profiles() {
            for partner in &profile.compatibility.perfect {
                assert!(
                    catalog
                        .profile(*partner)
                        .compatibility
                        .perfect
                        .contains(&profile.personality_type),
                    "{} <-> {}",
                    profile.personality_type,
                    partner
                );
            }
        }
    }

    #[test]
    fn missing_profile_is_reported() {
        let mut profiles = profiles::standard_profiles();
        profiles.retain(|profile| profile.personality_type != PersonalityType::Esi);
        assert_eq!(
            TypeCatalog::from_profiles(profiles).unwrap_err(),
            CatalogError::Missing(PersonalityType::Esi)
        );
    }

    #[test]
    fn duplicate_profile_is_reported() {
        let mut profiles = profiles::standard_profiles();
        let copy = profiles[0].clone();
        profiles.push(copy);
        assert_eq!(
            TypeCatalog::from_profiles(profiles).unwrap_err(),
            CatalogError::Duplicate(PersonalityType::Tdi)
        );
    }

    #[test]
    fn self_compatibility_is_reported() {
        let mut profiles = profiles::standard_profiles();
        profiles[1].compatibility.good.push(PersonalityType::Tdr);
        assert_eq!(
            TypeCatalog::from_profiles(profiles).unwrap_err(),
            CatalogError::SelfCompatibility(PersonalityType::Tdr)
        );
    }

    #[test]
    fn repeated_compatibility_entry_is_reported() {
        let mut profiles = profiles::standard_profiles();
        profiles[0].compatibility.growth.push(PersonalityType::Esr);
        assert!(matches!(
            TypeCatalog::from_profiles(profiles),
            Err(CatalogError::DuplicateCompatibility {
                owner: PersonalityType::Tdi,
                other: PersonalityType::Esr
            })
        ));
    }
}
