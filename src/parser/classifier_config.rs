use serde::{Deserialize, Serialize};

const DEFAULT_AGGREGATES: [&str; 5] = ["SUM", "COUNT", "MAX", "MIN", "AVG"];

/// Settings for [`ExpressionClassifier`](crate::parser::ExpressionClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Function names classified as aggregates, matched ignoring case.
    pub aggregates: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            aggregates: DEFAULT_AGGREGATES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(aggregates: &[&str]) -> Self {
        Self {
            aggregates: aggregates.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn with_aggregate(mut self, name: &str) -> Self {
        if !self.is_aggregate(name) {
            self.aggregates.push(name.to_string());
        }
        self
    }

    pub fn is_aggregate(&self, name: &str) -> bool {
        self.aggregates.iter().any(|aggregate| aggregate.eq_ignore_ascii_case(name))
    }
}
