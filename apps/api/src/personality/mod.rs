//! Personality Encoder: turns the four forced-choice quiz answers into a
//! 4-letter type code (E/I, S/N, T/F, J/P).

pub mod quiz;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Extroverted,
    Introverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perception {
    Sensing,
    Intuitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Thinking,
    Feeling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    Judging,
    Perceiving,
}

impl Energy {
    pub fn letter(self) -> char {
        match self {
            Energy::Extroverted => 'E',
            Energy::Introverted => 'I',
        }
    }
}

impl Perception {
    pub fn letter(self) -> char {
        match self {
            Perception::Sensing => 'S',
            Perception::Intuitive => 'N',
        }
    }
}

impl Decision {
    pub fn letter(self) -> char {
        match self {
            Decision::Thinking => 'T',
            Decision::Feeling => 'F',
        }
    }
}

impl Lifestyle {
    pub fn letter(self) -> char {
        match self {
            Lifestyle::Judging => 'J',
            Lifestyle::Perceiving => 'P',
        }
    }
}

/// One answer per quiz question, in encoder order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub energy: Energy,
    pub perception: Perception,
    pub decision: Decision,
    pub lifestyle: Lifestyle,
}

impl QuizAnswers {
    pub fn type_code(&self) -> TypeCode {
        encode(self.energy, self.perception, self.decision, self.lifestyle)
    }
}

/// A canonical 4-letter personality type code, e.g. `INTJ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeCode(String);

#[derive(Debug, Error, PartialEq)]
pub enum TypeCodeError {
    #[error("type code must be exactly 4 letters, got {0}")]
    Length(usize),

    #[error("'{letter}' is not valid in position {position} (expected one of {expected})")]
    Letter {
        letter: char,
        position: usize,
        expected: &'static str,
    },
}

const AXES: [[char; 2]; 4] = [['E', 'I'], ['S', 'N'], ['T', 'F'], ['J', 'P']];

impl TypeCode {
    /// Validates an externally supplied code. Input is case-insensitive;
    /// the stored form is upper-case.
    pub fn parse(raw: &str) -> Result<Self, TypeCodeError> {
        let letters: Vec<char> = raw.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != AXES.len() {
            return Err(TypeCodeError::Length(letters.len()));
        }

        for (position, (letter, axis)) in letters.iter().zip(AXES.iter()).enumerate() {
            if !axis.contains(letter) {
                return Err(TypeCodeError::Letter {
                    letter: *letter,
                    position: position + 1,
                    expected: match position {
                        0 => "E/I",
                        1 => "S/N",
                        2 => "T/F",
                        _ => "J/P",
                    },
                });
            }
        }

        Ok(TypeCode(letters.into_iter().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the type code from the four answers. Every combination is valid.
pub fn encode(
    energy: Energy,
    perception: Perception,
    decision: Decision,
    lifestyle: Lifestyle,
) -> TypeCode {
    TypeCode(
        [
            energy.letter(),
            perception.letter(),
            decision.letter(),
            lifestyle.letter(),
        ]
        .iter()
        .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_answers() -> Vec<QuizAnswers> {
        let mut out = Vec::new();
        for energy in [Energy::Extroverted, Energy::Introverted] {
            for perception in [Perception::Sensing, Perception::Intuitive] {
                for decision in [Decision::Thinking, Decision::Feeling] {
                    for lifestyle in [Lifestyle::Judging, Lifestyle::Perceiving] {
                        out.push(QuizAnswers {
                            energy,
                            perception,
                            decision,
                            lifestyle,
                        });
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_encode_intj() {
        let code = encode(
            Energy::Introverted,
            Perception::Intuitive,
            Decision::Thinking,
            Lifestyle::Judging,
        );
        assert_eq!(code.as_str(), "INTJ");
    }

    #[test]
    fn test_encode_esfp() {
        let code = encode(
            Energy::Extroverted,
            Perception::Sensing,
            Decision::Feeling,
            Lifestyle::Perceiving,
        );
        assert_eq!(code.to_string(), "ESFP");
    }

    #[test]
    fn test_all_combinations_yield_sixteen_distinct_codes() {
        let codes: HashSet<String> = all_answers()
            .iter()
            .map(|a| a.type_code().as_str().to_string())
            .collect();
        assert_eq!(codes.len(), 16);
        for code in &codes {
            assert_eq!(TypeCode::parse(code).as_ref().map(|c| c.as_str()), Ok(code.as_str()));
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        for answers in all_answers() {
            assert_eq!(answers.type_code(), answers.type_code());
        }
    }

    #[test]
    fn test_parse_normalises_case() {
        assert_eq!(TypeCode::parse(" enfp ").unwrap().as_str(), "ENFP");
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert_eq!(TypeCode::parse("INT"), Err(TypeCodeError::Length(3)));
        assert_eq!(
            TypeCode::parse("XXXX"),
            Err(TypeCodeError::Letter {
                letter: 'X',
                position: 1,
                expected: "E/I",
            })
        );
        assert!(matches!(
            TypeCode::parse("ESXJ"),
            Err(TypeCodeError::Letter { position: 3, .. })
        ));
    }

    #[test]
    fn test_answers_deserialize_from_snake_case() {
        let answers: QuizAnswers = serde_json::from_str(
            r#"{"energy":"introverted","perception":"sensing","decision":"thinking","lifestyle":"judging"}"#,
        )
        .unwrap();
        assert_eq!(answers.type_code().as_str(), "ISTJ");
    }
}
