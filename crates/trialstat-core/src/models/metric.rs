use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How categorical values are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Counting {
    /// One count per patient. List fields count each distinct tag once.
    PerPatient,
    /// Every list element counts. A patient on three medications adds three.
    PerOccurrence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum MetricKind {
    Categorical {
        counting: Counting,
    },
    Numerical {
        /// Explicit bucket edges, strictly increasing. `None` means five
        /// equal-width buckets over the observed range.
        #[serde(default)]
        buckets: Option<Vec<f64>>,
    },
}

/// A named rule for extracting one statistic from a population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricDefinition {
    pub id: String,
    pub name: String,
    /// Patient field the metric reads, see [`crate::fields`].
    pub field: String,
    pub kind: MetricKind,
}

impl MetricDefinition {
    pub fn categorical(id: &str, name: &str, field: &str) -> Self {
        Self::new(
            id,
            name,
            field,
            MetricKind::Categorical {
                counting: Counting::PerPatient,
            },
        )
    }

    pub fn occurrences(id: &str, name: &str, field: &str) -> Self {
        Self::new(
            id,
            name,
            field,
            MetricKind::Categorical {
                counting: Counting::PerOccurrence,
            },
        )
    }

    pub fn numerical(id: &str, name: &str, field: &str) -> Self {
        Self::new(id, name, field, MetricKind::Numerical { buckets: None })
    }

    /// Replace automatic bucketing with explicit edges. No effect on
    /// categorical definitions.
    pub fn with_buckets(mut self, edges: &[f64]) -> Self {
        if let MetricKind::Numerical { buckets } = &mut self.kind {
            *buckets = Some(edges.to_vec());
        }
        self
    }

    fn new(id: &str, name: &str, field: &str, kind: MetricKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            field: field.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
    pub percentage: f64,
}

/// One histogram bucket. `[min, max)`, except the last bucket of a metric
/// which is `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BucketCount {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum MetricData {
    Categorical {
        total: usize,
        /// Sorted by count, descending.
        data: Vec<CategoryCount>,
    },
    Numerical {
        total: usize,
        min: f64,
        max: f64,
        average: f64,
        median: f64,
        buckets: Vec<BucketCount>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricResult {
    pub metric_id: String,
    pub name: String,
    pub result: MetricData,
}

impl MetricResult {
    /// A zero-valued result of the definition's kind.
    pub fn empty(definition: &MetricDefinition) -> Self {
        let result = match definition.kind {
            MetricKind::Categorical { .. } => MetricData::Categorical {
                total: 0,
                data: Vec::new(),
            },
            MetricKind::Numerical { .. } => MetricData::Numerical {
                total: 0,
                min: 0.0,
                max: 0.0,
                average: 0.0,
                median: 0.0,
                buckets: Vec::new(),
            },
        };
        Self {
            metric_id: definition.id.clone(),
            name: definition.name.clone(),
            result,
        }
    }

    pub fn total(&self) -> usize {
        match &self.result {
            MetricData::Categorical { total, .. } | MetricData::Numerical { total, .. } => *total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
