use std::collections::HashMap;

use crate::funnel::catalog::{QuizStep, SelectionMode};

/// What a step has recorded so far. Single-select steps hold one value
/// (empty string means unanswered); multi-select steps hold a set.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

impl Answer {
    pub fn is_complete(&self) -> bool {
        match self {
            Answer::Single(value) => !value.is_empty(),
            Answer::Multi(values) => !values.is_empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Answer::Single(selected) => selected == value,
            Answer::Multi(selected) => selected.iter().any(|v| v == value),
        }
    }
}

/// The funnel session: current position and everything selected so far.
/// Owned by the rendering layer and passed into every interaction handler,
/// so transitions are testable without a browser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizFunnel {
    step_index: usize,
    answers: HashMap<String, Answer>,
}

impl QuizFunnel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn answer(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.answer(key).map_or(false, |a| a.contains(value))
    }

    /// Records a selection. Single mode replaces the prior value; multi mode
    /// toggles membership. The value is trusted to come from the catalog.
    pub fn select(&mut self, key: &str, value: &str, mode: SelectionMode) {
        match mode {
            SelectionMode::Single => {
                self.answers
                    .insert(key.to_string(), Answer::Single(value.to_string()));
            }
            SelectionMode::Multi => {
                let entry = self
                    .answers
                    .entry(key.to_string())
                    .or_insert_with(|| Answer::Multi(Vec::new()));
                if let Answer::Multi(values) = entry {
                    if let Some(pos) = values.iter().position(|v| v == value) {
                        values.remove(pos);
                    } else {
                        values.push(value.to_string());
                    }
                } else {
                    // A mode flip in the catalog restarts the step's answer.
                    *entry = Answer::Multi(vec![value.to_string()]);
                }
            }
        }
    }

    pub fn step_complete(&self, step: &QuizStep) -> bool {
        self.answer(&step.key).map_or(false, Answer::is_complete)
    }

    /// Clamped to the last step (the contact form). Whether the move is
    /// allowed is the caller's call; the Next button stays disabled until
    /// the current step is complete.
    pub fn advance(&mut self, total_steps: usize) {
        if total_steps == 0 {
            return;
        }
        self.step_index = (self.step_index + 1).min(total_steps - 1);
    }

    pub fn retreat(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    pub fn on_contact_step(&self, total_steps: usize) -> bool {
        total_steps > 0 && self.step_index == total_steps - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funnel::catalog::quiz_steps;

    #[test]
    fn single_select_replaces_prior_choice() {
        let mut funnel = QuizFunnel::new();
        funnel.select("projectType", "website", SelectionMode::Single);
        funnel.select("projectType", "webapp", SelectionMode::Single);

        assert!(funnel.is_selected("projectType", "webapp"));
        assert!(!funnel.is_selected("projectType", "website"));
    }

    #[test]
    fn multi_select_toggle_is_idempotent_over_even_repeats() {
        let mut funnel = QuizFunnel::new();
        funnel.select("scope", "design", SelectionMode::Multi);
        let one_selection = funnel.clone();

        funnel.select("scope", "backend", SelectionMode::Multi);
        funnel.select("scope", "backend", SelectionMode::Multi);

        assert_eq!(funnel, one_selection);
        assert!(funnel.is_selected("scope", "design"));
    }

    #[test]
    fn unanswered_and_emptied_steps_are_incomplete() {
        let steps = quiz_steps();
        let scope = steps.iter().find(|s| s.key == "scope").unwrap();

        let mut funnel = QuizFunnel::new();
        assert!(!funnel.step_complete(scope));

        funnel.select("scope", "ai", SelectionMode::Multi);
        assert!(funnel.step_complete(scope));

        funnel.select("scope", "ai", SelectionMode::Multi);
        assert!(!funnel.step_complete(scope));
    }

    #[test]
    fn advance_and_retreat_are_clamped() {
        let mut funnel = QuizFunnel::new();
        funnel.retreat();
        assert_eq!(funnel.step_index(), 0);

        for _ in 0..10 {
            funnel.advance(3);
        }
        assert_eq!(funnel.step_index(), 2);

        funnel.advance(0);
        assert_eq!(funnel.step_index(), 2);
    }

    #[test]
    fn five_catalog_steps_land_on_the_contact_step() {
        // 5 catalog steps + the contact step.
        let total = 6;
        let mut funnel = QuizFunnel::new();
        for _ in 0..5 {
            funnel.advance(total);
        }
        assert_eq!(funnel.step_index(), 5);
        assert!(funnel.on_contact_step(total));
        assert_eq!(crate::funnel::progress::compute_progress(5, total), 100);
    }
}
