//! Static career tables, materialised once at startup and shared read-only.

use std::collections::HashMap;

use crate::personality::{TypeCode, TypeCodeError};

/// Lower-cased skill name → career title.
const SKILL_TO_CAREER: &[(&str, &str)] = &[
    ("python", "Data Scientist"),
    ("machine learning", "ML Engineer"),
    ("deep learning", "AI Researcher"),
    ("web development", "Frontend Developer"),
    ("react", "Full Stack Developer"),
    ("java", "Backend Developer"),
    ("excel", "Data Analyst"),
    ("communication", "Sales Executive"),
    ("graphic design", "UI/UX Designer"),
    ("writing", "Content Writer"),
    ("teaching", "Educator"),
    ("sql", "Database Administrator"),
    ("linux", "System Administrator"),
    ("cloud", "Cloud Engineer"),
    ("android", "Mobile App Developer"),
    ("photography", "Photographer"),
    ("video editing", "Video Editor"),
];

/// Type code → suggested careers. Only 8 of the 16 codes have entries; the
/// rest resolve to an empty list.
const TYPE_TO_CAREERS: &[(&str, &[&str])] = &[
    ("INTJ", &["Strategic Planner", "Software Architect", "Data Scientist"]),
    ("INFP", &["Writer", "Counselor", "Artist"]),
    ("ENFP", &["Creative Director", "Public Relations", "Life Coach"]),
    ("ISTJ", &["Accountant", "Analyst", "Auditor"]),
    ("ISFJ", &["Nurse", "Librarian", "Elementary Teacher"]),
    ("ENTP", &["Entrepreneur", "Marketing Manager", "Product Designer"]),
    ("ESTJ", &["Project Manager", "Operations Manager", "Military Officer"]),
    ("ESFP", &["Performer", "Event Planner", "Customer Support"]),
];

#[derive(Debug, Clone)]
pub struct CareerCatalog {
    by_skill: HashMap<String, String>,
    by_type: HashMap<String, Vec<String>>,
}

impl CareerCatalog {
    /// Builds the catalog from the built-in tables. Fails only if a type key
    /// is not a well-formed code.
    pub fn builtin() -> Result<Self, TypeCodeError> {
        Self::from_tables(SKILL_TO_CAREER, TYPE_TO_CAREERS)
    }

    pub fn from_tables(
        skills: &[(&str, &str)],
        types: &[(&str, &[&str])],
    ) -> Result<Self, TypeCodeError> {
        let by_skill = skills
            .iter()
            .map(|(skill, career)| (skill.trim().to_lowercase(), career.to_string()))
            .collect();

        let mut by_type = HashMap::with_capacity(types.len());
        for (code, careers) in types {
            let code = TypeCode::parse(code)?;
            by_type.insert(
                code.as_str().to_string(),
                careers.iter().map(|c| c.to_string()).collect(),
            );
        }

        Ok(Self { by_skill, by_type })
    }

    /// `skill` must already be normalised (trimmed, lower-cased).
    pub fn career_for_skill(&self, skill: &str) -> Option<&str> {
        self.by_skill.get(skill).map(String::as_str)
    }

    /// Unknown or unlisted codes yield an empty slice.
    pub fn careers_for_type(&self, type_code: &str) -> &[String] {
        self.by_type
            .get(type_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn skill_count(&self) -> usize {
        self.by_skill.len()
    }

    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let catalog = CareerCatalog::builtin().unwrap();
        assert_eq!(catalog.skill_count(), SKILL_TO_CAREER.len());
        assert_eq!(catalog.type_count(), 8);
    }

    #[test]
    fn test_skill_keys_are_unique_and_lowercase() {
        let catalog = CareerCatalog::builtin().unwrap();
        // A duplicate key would shrink the map below the table length.
        assert_eq!(catalog.skill_count(), 17);
        for (skill, _) in SKILL_TO_CAREER {
            assert_eq!(*skill, skill.to_lowercase());
        }
    }

    #[test]
    fn test_type_entries_hold_one_to_three_careers() {
        for (_, careers) in TYPE_TO_CAREERS {
            assert!((1..=3).contains(&careers.len()));
        }
    }

    #[test]
    fn test_lookups_miss_silently() {
        let catalog = CareerCatalog::builtin().unwrap();
        assert_eq!(catalog.career_for_skill("sql"), Some("Database Administrator"));
        assert_eq!(catalog.career_for_skill("unicorn taming"), None);
        assert!(catalog.careers_for_type("ENTJ").is_empty());
        assert!(catalog.careers_for_type("XXXX").is_empty());
        assert_eq!(catalog.careers_for_type("ISTJ").len(), 3);
    }

    #[test]
    fn test_malformed_type_key_is_rejected() {
        let result = CareerCatalog::from_tables(&[], &[("ABCD", &["Anything"])]);
        assert!(result.is_err());
    }
}
