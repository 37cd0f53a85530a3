/// Outbound port for operator-facing status lines.
///
/// Every fetch/generate/apply step reports a human-readable line so an
/// operator can follow a run without reading artifacts; warnings cover
/// downgraded per-kind and per-item failures.
pub trait StatusReporter {
    fn report(&self, message: &str);
    fn warn(&self, message: &str);
}
