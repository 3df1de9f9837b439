/// A candidate bowl rewrite produced by the substitution search.
#[derive(Debug, Clone)]
pub(crate) struct TreatCandidate {
    pub quantities: Vec<f64>,
    pub treat_ounces: f64,
}

impl TreatCandidate {
    /// Ranking rule for substitution candidates: strictly more total treat
    /// mass wins. Ties keep the incumbent, so the first candidate found in
    /// iteration order is retained.
    pub fn outranks(&self, incumbent: &TreatCandidate) -> bool {
        self.treat_ounces > incumbent.treat_ounces
    }
}
