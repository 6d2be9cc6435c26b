use serde::{Deserialize, Serialize};

// =============================================================================
// Batch records
// =============================================================================

/// Chemical composition of a batch, in weight-percent per element.
///
/// The field set is fixed for every record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub si: f64,
    pub fe: f64,
    pub ti: f64,
    pub v: f64,
    pub cu: f64,
    pub mn: f64,
    /// Other impurities, summed.
    pub othimp: f64,
    pub al: f64,
}

impl Composition {
    /// Labelled values in reporting order: Si, Fe, Ti, V, Cu, Mn, Other Impurities, Al.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("Si", self.si),
            ("Fe", self.fe),
            ("Ti", self.ti),
            ("V", self.v),
            ("Cu", self.cu),
            ("Mn", self.mn),
            ("Other Impurities", self.othimp),
            ("Al", self.al),
        ]
    }
}

/// Measured properties of one production batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Six-digit batch identifier.
    pub batch_id: String,
    /// Ultimate tensile strength.
    pub uts: f64,
    /// Elongation, in percent.
    pub elongation: f64,
    pub conductivity: f64,
    pub grade: String,
    pub material: String,
    pub composition: Composition,
    /// ISO-8601 UTC instant, `YYYY-MM-DDTHH:MM:SSZ`.
    pub timestamp: String,
}

// =============================================================================
// Lookup keys
// =============================================================================

/// Which index a key resolves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    BatchId,
    Timestamp,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::BatchId => "batch_id",
            LookupKind::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key extracted from a question: a batch id or a timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LookupKey {
    BatchId(String),
    Timestamp(String),
}

impl LookupKey {
    pub fn kind(&self) -> LookupKind {
        match self {
            LookupKey::BatchId(_) => LookupKind::BatchId,
            LookupKey::Timestamp(_) => LookupKind::Timestamp,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            LookupKey::BatchId(v) | LookupKey::Timestamp(v) => v,
        }
    }
}
