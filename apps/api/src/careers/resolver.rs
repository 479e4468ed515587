//! Career Resolver: combines skill-derived and personality-derived careers.
//!
//! Precedence:
//! 1. both sets non-empty → intersection, or the union when they are disjoint
//! 2. exactly one set non-empty → that set
//! 3. both empty → [`NO_SUITABLE_CAREER`]

use std::collections::BTreeSet;

use serde::Serialize;

use crate::careers::catalog::CareerCatalog;

pub const NO_SUITABLE_CAREER: &str = "No suitable career found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSuggestion {
    /// Distinct titles, alphabetical. Never empty.
    pub careers: Vec<String>,
    pub type_code: String,
}

/// Splits on commas, trims and lower-cases each segment, drops empty ones.
pub fn normalize_skills(skills_text: &str) -> impl Iterator<Item = String> + '_ {
    skills_text
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

pub fn resolve(catalog: &CareerCatalog, skills_text: &str, type_code: &str) -> CareerSuggestion {
    let from_skills: BTreeSet<&str> = normalize_skills(skills_text)
        .filter_map(|skill| catalog.career_for_skill(&skill))
        .collect();

    let from_type: BTreeSet<&str> = catalog
        .careers_for_type(type_code)
        .iter()
        .map(String::as_str)
        .collect();

    let combined: BTreeSet<&str> = match (from_skills.is_empty(), from_type.is_empty()) {
        (false, false) => {
            let matched: BTreeSet<&str> = from_skills.intersection(&from_type).copied().collect();
            if matched.is_empty() {
                from_skills.union(&from_type).copied().collect()
            } else {
                matched
            }
        }
        (false, true) => from_skills,
        (true, false) => from_type,
        (true, true) => BTreeSet::from([NO_SUITABLE_CAREER]),
    };

    CareerSuggestion {
        careers: combined.into_iter().map(str::to_string).collect(),
        type_code: type_code.to_string(),
    }
}
