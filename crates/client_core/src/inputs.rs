//! Input constraints shared by the workflow forms.

/// Inclusive numeric bounds with a step grid anchored at `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamps into range and snaps to the step grid. Non-finite input yields `None`.
    pub fn constrain(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return Some(clamped);
        }
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).clamp(self.min, self.max);
        // step multiplication leaves binary noise such as 8.100000000000001
        Some((snapped * 1e6).round() / 1e6)
    }
}

/// A bounded numeric form value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericInput {
    value: f64,
    range: NumericRange,
}

impl NumericInput {
    pub fn new(initial: f64, range: NumericRange) -> Self {
        let value = range.constrain(initial).unwrap_or(range.min);
        Self { value, range }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> NumericRange {
        self.range
    }

    /// Returns `false` and keeps the previous value when `value` is not a number.
    pub fn set(&mut self, value: f64) -> bool {
        match self.range.constrain(value) {
            Some(constrained) => {
                self.value = constrained;
                true
            }
            None => false,
        }
    }

    /// Integer coercion for count-like wire fields; truncates like the form's integer parse.
    pub fn as_count(&self) -> u32 {
        self.value.max(0.0).trunc() as u32
    }
}

/// Splits a comma-separated skill list, trimming each entry and dropping empty ones.
/// Order and duplicates are preserved as typed.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/inputs_tests.rs"]
mod tests;
