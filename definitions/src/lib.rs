//! Definitions -- A tiny interface for splitting contigs into bins.
//! The binning table is built once from an assignment file and then read-only. The result of a run is summarized by [SplitSummary](SplitSummary), which is also what the CLI dumps as JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contig ID -> bins (CAGs) it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinningTable {
    /// Bin labels of each contig, in the order they first appeared in the input.
    /// Each label appears at most once per contig.
    pub assignments: HashMap<String, Vec<String>>,
}

impl BinningTable {
    pub fn new() -> Self {
        Self::default()
    }
    /// Assign `bin` to `id`. Returns false if the pair was already registered.
    pub fn insert(&mut self, id: &str, bin: &str) -> bool {
        let bins = self.assignments.entry(id.to_string()).or_default();
        if bins.iter().any(|b| b == bin) {
            false
        } else {
            bins.push(bin.to_string());
            true
        }
    }
    /// Bins of `id`. Unknown contigs belong to no bin.
    pub fn bins(&self, id: &str) -> &[String] {
        self.assignments
            .get(id)
            .map(|bins| bins.as_slice())
            .unwrap_or(&[])
    }
    /// Number of contigs in the table.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
    /// Distinct bin labels, sorted.
    pub fn bin_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .assignments
            .values()
            .flat_map(|bins| bins.iter().map(|b| b.as_str()))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

/// How output files are handled while splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlePolicy {
    /// Open in append mode, write one record, and close. Repeated for every record.
    #[default]
    Reopen,
    /// Keep one buffered writer per output file until the end of the run.
    KeepOpen,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinStat {
    pub bin: String,
    pub path: String,
    /// Number of records appended in this run.
    pub records: usize,
    /// Total sequence length appended in this run.
    pub bases: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SplitSummary {
    pub sample: String,
    pub total_records: usize,
    /// Records written to at least one bin.
    pub assigned_records: usize,
    /// Records without any bin.
    pub skipped_records: usize,
    /// Sorted by the bin label.
    pub bins: Vec<BinStat>,
}

impl SplitSummary {
    pub fn new(sample: &str) -> Self {
        Self {
            sample: sample.to_string(),
            ..Default::default()
        }
    }
    pub fn distinct_bins(&self) -> usize {
        self.bins.len()
    }
}

impl std::fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.sample,
            self.total_records,
            self.assigned_records,
            self.skipped_records,
            self.bins.len()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn insert_dedup() {
        let mut table = BinningTable::new();
        assert!(table.insert("ctg1", "binA"));
        assert!(table.insert("ctg1", "binB"));
        assert!(!table.insert("ctg1", "binA"));
        assert_eq!(table.bins("ctg1"), &["binA".to_string(), "binB".to_string()]);
        assert_eq!(table.len(), 1);
    }
    #[test]
    fn absent_is_empty() {
        let table = BinningTable::new();
        assert!(table.bins("ctg3").is_empty());
        assert!(table.is_empty());
    }
    #[test]
    fn labels_sorted() {
        let mut table = BinningTable::new();
        table.insert("ctg2", "binB");
        table.insert("ctg1", "binA");
        table.insert("ctg2", "binA");
        assert_eq!(table.bin_labels(), vec!["binA", "binB"]);
    }
    #[test]
    fn reopen_by_default() {
        assert_eq!(HandlePolicy::default(), HandlePolicy::Reopen);
    }
}
