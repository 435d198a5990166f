// Runtime constraint weight configuration.

/// Multipliers applied to the soft constraints before summing.
///
/// Hard constraints are not weighted: every violation counts one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintWeights {
    /// Weight of the squared deviation from the ideal shift count.
    pub ideal_load: f64,
    /// Weight of the uneven spacing penalty, in weeks.
    pub distribution: f64,
    /// Penalty per assignment on an unwanted weekday.
    pub unwanted_weekday: f64,
}

impl ConstraintWeights {
    pub fn new(ideal_load: f64, distribution: f64, unwanted_weekday: f64) -> Self {
        Self {
            ideal_load,
            distribution,
            unwanted_weekday,
        }
    }

    // Sets the ideal load weight.
    pub fn with_ideal_load(mut self, weight: f64) -> Self {
        self.ideal_load = weight;
        self
    }

    // Sets the distribution weight.
    pub fn with_distribution(mut self, weight: f64) -> Self {
        self.distribution = weight;
        self
    }

    // Sets the unwanted weekday weight.
    pub fn with_unwanted_weekday(mut self, weight: f64) -> Self {
        self.unwanted_weekday = weight;
        self
    }
}

impl Default for ConstraintWeights {
    fn default() -> Self {
        Self {
            ideal_load: 1.0,
            distribution: 0.3,
            unwanted_weekday: 0.2,
        }
    }
}
