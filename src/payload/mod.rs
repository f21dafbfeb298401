//! Submission records and the three JSON shapes they serialize to.

use serde::{Deserialize, Serialize};

/// One form submission as a flat object. Field order in the encoding is
/// declaration order, so repeated encodes of the same record are
/// byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub cmd_name: String,
    pub data: String,
    pub range: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_other: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_other: Option<Vec<String>>,
}

impl Submission {
    pub fn new(
        cmd_name: impl Into<String>,
        data: impl Into<String>,
        range: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            cmd_name: cmd_name.into(),
            data: data.into(),
            range: range.into(),
            status: status.into(),
            input_other: None,
            output_other: None,
        }
    }

    /// The built-in sample record sent when no field overrides are given.
    pub fn sample() -> Self {
        Self {
            cmd_name: "Test Command".to_string(),
            data: "Some data".to_string(),
            range: "0-100".to_string(),
            status: "OK".to_string(),
            input_other: Some(vec!["Input 1".to_string(), "Input 2".to_string()]),
            output_other: Some(vec!["Output 1".to_string(), "Output 2".to_string()]),
        }
    }

    /// The scalar fields as `(name, value)` pairs, in declaration order.
    pub fn named_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("cmd_name", self.cmd_name.as_str()),
            ("data", self.data.as_str()),
            ("range", self.range.as_str()),
            ("status", self.status.as_str()),
        ]
    }
}

/// The batch shape: one group of `[name, value]` rows. Transmitted as an
/// array of groups, `[{"rows": [["cmd_name", ...], ...]}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGroup {
    pub rows: Vec<[String; 2]>,
}

impl RowGroup {
    /// One row per scalar field of the submission; the optional list
    /// fields do not fit the two-column row shape and are not carried.
    pub fn from_submission(submission: &Submission) -> Self {
        let rows = submission
            .named_fields()
            .iter()
            .map(|(name, value)| [name.to_string(), value.to_string()])
            .collect();
        Self { rows }
    }
}

/// The parallel-columns shape: one entry per submission in each column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTable {
    pub cmd_name: Vec<String>,
    pub data: Vec<String>,
    pub range: Vec<String>,
    pub status: Vec<String>,
}

impl ColumnTable {
    pub fn push(&mut self, submission: &Submission) {
        self.cmd_name.push(submission.cmd_name.clone());
        self.data.push(submission.data.clone());
        self.range.push(submission.range.clone());
        self.status.push(submission.status.clone());
    }

    pub fn len(&self) -> usize {
        self.cmd_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmd_name.is_empty()
    }
}
