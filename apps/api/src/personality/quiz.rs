use serde::Serialize;

/// A forced-choice quiz question. `options[0]` maps to the first letter of
/// its axis (E, S, T, J), `options[1]` to the second.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: [QuizOption; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    /// Wire value accepted by `QuizAnswers`.
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> QuizOption {
    QuizOption { value, label }
}

pub static QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        key: "energy",
        prompt: "Do you enjoy social gatherings?",
        options: [
            option("extroverted", "Extroverted"),
            option("introverted", "Introverted"),
        ],
    },
    QuizQuestion {
        key: "perception",
        prompt: "Do you focus more on facts or ideas?",
        options: [
            option("sensing", "Sensing"),
            option("intuitive", "Intuitive"),
        ],
    },
    QuizQuestion {
        key: "decision",
        prompt: "Are you more logical or empathetic in decisions?",
        options: [option("thinking", "Thinking"), option("feeling", "Feeling")],
    },
    QuizQuestion {
        key: "lifestyle",
        prompt: "Do you prefer plans or spontaneity?",
        options: [
            option("judging", "Judging"),
            option("perceiving", "Perceiving"),
        ],
    },
];
