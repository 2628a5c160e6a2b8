use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Overall outcome of normalizing one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationStatus {
    /// Every field already had its canonical type.
    #[default]
    Clean,
    /// At least one field was defaulted, coerced, or resolved by fallback.
    Degraded,
}

/// How a field deviated from its canonical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegradationKind {
    /// Required field was absent or `null` and received its default.
    Missing,
    /// Field had the wrong type and was converted.
    Coerced,
    /// Field had an unusable value and was dropped or defaulted.
    Invalid,
    /// Field was resolved by a documented fallback value.
    Fallback,
}

impl DegradationKind {
    /// Stable lowercase name used in warning codes and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradationKind::Missing => "missing",
            DegradationKind::Coerced => "coerced",
            DegradationKind::Invalid => "invalid",
            DegradationKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DegradationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable warning code, `<field>.<kind>` (e.g. `gender.fallback`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizationWarning(String);

impl NormalizationWarning {
    /// Creates a warning for `field`.
    pub fn new(field: &str, kind: DegradationKind) -> Self {
        Self(format!("{field}.{kind}"))
    }

    /// The warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Record of every field that did not arrive in canonical form.
///
/// Reports are diagnostic only; they never influence the produced record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Overall status.
    pub status: NormalizationStatus,
    /// Warning codes in field order.
    pub warnings: Vec<NormalizationWarning>,
    /// Warning counts per degradation kind.
    pub metrics: BTreeMap<String, u64>,
}

impl NormalizationReport {
    /// True when no field was degraded.
    pub fn is_clean(&self) -> bool {
        self.status == NormalizationStatus::Clean
    }

    /// True when a warning with `code` was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|warning| warning.code() == code)
    }

    pub(crate) fn record(&mut self, field: &str, kind: DegradationKind) {
        tracing::debug!(field, kind = kind.as_str(), "field normalized from non-canonical input");
        self.status = NormalizationStatus::Degraded;
        self.warnings.push(NormalizationWarning::new(field, kind));
        self.metrics
            .entry(kind.as_str().to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
}

/// A normalized value together with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    /// The canonical value.
    pub value: T,
    /// What had to be fixed up to produce it.
    pub report: NormalizationReport,
}
