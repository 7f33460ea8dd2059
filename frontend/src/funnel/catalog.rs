use once_cell::sync::Lazy;
use serde::Deserialize;

/// How a step records selections: one value, or a toggleable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multi,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StepOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizStep {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub mode: SelectionMode,
    pub options: Vec<StepOption>,
}

// The step catalog is content, not control flow. Copy edits happen in the
// JSON document; this module only gives it a typed shape.
static QUIZ_STEPS: Lazy<Vec<QuizStep>> = Lazy::new(|| {
    serde_json::from_str(include_str!("quiz_steps.json"))
        .expect("quiz_steps.json must deserialize")
});

pub fn quiz_steps() -> &'static [QuizStep] {
    &QUIZ_STEPS
}

/// Catalog steps plus the trailing contact-form step.
pub fn total_steps() -> usize {
    QUIZ_STEPS.len() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_with_expected_shape() {
        let steps = quiz_steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(total_steps(), 7);

        for step in steps {
            assert!(!step.key.is_empty());
            assert!(!step.title.is_empty());
            assert!(!step.options.is_empty());
            for option in &step.options {
                assert!(!option.value.is_empty());
                assert!(!option.label.is_empty());
            }
        }
    }

    #[test]
    fn step_keys_are_unique() {
        let steps = quiz_steps();
        let mut keys: Vec<&str> = steps.iter().map(|s| s.key.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), steps.len());
    }

    #[test]
    fn only_the_scope_step_is_multi_select() {
        for step in quiz_steps() {
            let expected = if step.key == "scope" {
                SelectionMode::Multi
            } else {
                SelectionMode::Single
            };
            assert_eq!(step.mode, expected, "step {}", step.key);
        }
    }
}
