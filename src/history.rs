/// A single evaluated expression together with its rendered outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The expression text exactly as the caller supplied it.
    pub expression: String,
    /// The rendered result or error message.
    pub outcome:    String,
}

/// Stores the evaluation history.
///
/// This struct is an ordered log of `(expression, outcome)` pairs, appended
/// to after each evaluation. It is owned and driven by the caller; the
/// pipeline itself records nothing, which keeps evaluation stateless and
/// reentrant.
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

#[allow(clippy::new_without_default)]
impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an entry with a pre-rendered outcome.
    pub fn record(&mut self, expression: impl Into<String>, outcome: impl Into<String>) {
        self.entries.push(HistoryEntry { expression: expression.into(),
                                         outcome:    outcome.into(), });
    }

    /// Appends an entry for a pipeline outcome.
    ///
    /// Successful results are rendered with their `Display` form and errors
    /// with theirs, so the log reads the same way the caller would print it.
    ///
    /// ## Example
    /// ```
    /// use numeval::{evaluate_expression, history::History};
    ///
    /// let mut history = History::new();
    ///
    /// for expression in ["1 + 2", "1 / 0"] {
    ///     let outcome = evaluate_expression(expression);
    ///     history.record_outcome(expression, &outcome);
    /// }
    ///
    /// assert_eq!(history.entries()[0].outcome, "3");
    /// assert!(history.entries()[1].outcome.contains("Division by zero"));
    /// ```
    pub fn record_outcome(&mut self,
                          expression: &str,
                          outcome: &Result<f64, Box<dyn std::error::Error>>) {
        let rendered = match outcome {
            Ok(value) => value.to_string(),
            Err(e) => e.to_string(),
        };

        self.record(expression, rendered);
    }

    /// Gets the recorded entries in arrival order.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
