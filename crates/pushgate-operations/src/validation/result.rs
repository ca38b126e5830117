use pushgate_core::Violation;
use serde::Serialize;

/// Ordered violations for one or more ref changes. An empty result accepts the push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    /// Violation texts as shown to the pusher, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
