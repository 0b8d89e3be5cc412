use std::collections::{BTreeSet, HashSet};

/// Source of truth for which objectives (e.g. `"Goblin x 10"`) are done.
///
/// Combat and exploration systems feed objectives in; quests only read.
pub trait ObjectiveTracker {
    /// Returns true if the objective has been completed.
    fn is_objective_complete(&self, objective: &str) -> bool;

    /// Objectives from `required` that are not yet complete, in input order.
    fn missing_objectives<'a>(&self, required: &'a [String]) -> Vec<&'a str> {
        required
            .iter()
            .map(String::as_str)
            .filter(|o| !self.is_objective_complete(o))
            .collect()
    }
}

impl ObjectiveTracker for BTreeSet<String> {
    fn is_objective_complete(&self, objective: &str) -> bool {
        self.contains(objective)
    }
}

impl ObjectiveTracker for HashSet<String> {
    fn is_objective_complete(&self, objective: &str) -> bool {
        self.contains(objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_objectives_preserves_order() {
        let mut done = BTreeSet::new();
        done.insert("Goblin x 10".to_string());
        let required = vec![
            "Treasure x 1".to_string(),
            "Goblin x 10".to_string(),
            "Fire Dragon x 1".to_string(),
        ];
        assert_eq!(
            done.missing_objectives(&required),
            vec!["Treasure x 1", "Fire Dragon x 1"]
        );
    }

    #[test]
    fn empty_requirements_are_met() {
        let done: HashSet<String> = HashSet::new();
        assert!(done.missing_objectives(&[]).is_empty());
    }
}
