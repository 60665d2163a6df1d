//! Diagnostics for a single parse run.

/// Term-level bookkeeping collected while a field string is interpreted.
///
/// Content errors are silently absorbed by the grammar; this is where they
/// stay observable. `unresolved_terms` lists every sub-term that contributed
/// an empty set, tagged with its field label.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// Uppercased alias token, when the alias path was taken.
    pub alias: Option<String>,
    /// Leaf sub-terms seen across all five fields.
    pub terms_total: usize,
    /// Leaf sub-terms that produced at least one value.
    pub terms_recognized: usize,
    /// Sub-terms that resolved to nothing, as `"<field>: <term>"`.
    pub unresolved_terms: Vec<String>,
}

impl ParseDiagnostics {
    /// Fraction of leaf sub-terms that resolved to values.
    pub fn coverage(&self) -> f64 {
        if self.terms_total == 0 {
            return 0.0;
        }
        self.terms_recognized as f64 / self.terms_total as f64
    }
}
