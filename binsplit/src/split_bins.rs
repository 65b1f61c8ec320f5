//! Split contigs into bins.
//!
//! Every contig is appended to `{output_dir}/{sample}-{bin}.fasta` for each bin it belongs to.
//! Contigs are streamed one by one, so the input file is never loaded at once.
//! Output files are opened in append mode. Thus, running twice on the same directory
//! duplicates every record.
use crate::annotation::{load_annotation, AnnotationConfig};
use crate::sample::{rewrite_id, sample_name};
use bio::io::fasta;
use definitions::{BinStat, BinningTable, HandlePolicy, SplitSummary};
use std::collections::{BTreeMap, HashMap};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitConfig {
    /// Rename each contig into `{sample}-{number}` and drop its description.
    pub rewrite_ids: bool,
    /// Malformed lines in the binning file are errors.
    pub strict: bool,
    pub handle_policy: HandlePolicy,
}

impl SplitConfig {
    pub fn new(rewrite_ids: bool, strict: bool, handle_policy: HandlePolicy) -> Self {
        Self {
            rewrite_ids,
            strict,
            handle_policy,
        }
    }
}

pub fn output_path(output_dir: &Path, sample: &OsStr, bin: &str) -> PathBuf {
    let mut name = OsString::from(sample);
    name.push(format!("-{}.fasta", bin));
    output_dir.join(name)
}

pub fn split<P, Q, R>(
    contigs: P,
    binning: Q,
    output_dir: R,
    config: &SplitConfig,
) -> std::io::Result<SplitSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    debug!("START\tSplitBins");
    let contigs = contigs.as_ref();
    let sample = sample_name(contigs)?;
    debug!("SAMPLE\t{:?}", sample);
    let table = load_annotation(binning, &AnnotationConfig::new(config.strict))?;
    debug!("Opening {:?}", contigs);
    let file = std::fs::File::open(contigs)?;
    split_records(file, &sample, &table, output_dir.as_ref(), config)
}

/// Split the FASTA records from `reader`. The output directory should exist.
pub fn split_records<R: std::io::Read>(
    reader: R,
    sample: &OsStr,
    table: &BinningTable,
    output_dir: &Path,
    config: &SplitConfig,
) -> std::io::Result<SplitSummary> {
    let records = fasta::Reader::new(reader).records();
    let summary = match config.handle_policy {
        HandlePolicy::Reopen => {
            let mut sink = ReopenSink;
            let summary = distribute(records, sample, table, output_dir, config, &mut sink)?;
            sink.finish()?;
            summary
        }
        HandlePolicy::KeepOpen => {
            let mut sink = CachedSink::default();
            let summary = distribute(records, sample, table, output_dir, config, &mut sink)?;
            sink.finish()?;
            summary
        }
    };
    for stat in summary.bins.iter() {
        info!("BIN\t{}\t{}\t{}", stat.bin, stat.records, stat.bases);
    }
    info!("BINS\t{}", summary.distinct_bins());
    debug!("SPLIT\t{}", summary);
    Ok(summary)
}

fn distribute<I, S>(
    records: I,
    sample: &OsStr,
    table: &BinningTable,
    output_dir: &Path,
    config: &SplitConfig,
    sink: &mut S,
) -> std::io::Result<SplitSummary>
where
    I: Iterator<Item = std::io::Result<fasta::Record>>,
    S: BinSink,
{
    let mut summary = SplitSummary::new(&sample.to_string_lossy());
    // The path is kept as is; `BinStat::path` is only for display.
    let mut stats: BTreeMap<&str, (PathBuf, BinStat)> = BTreeMap::new();
    for record in records {
        let record = record?;
        summary.total_records += 1;
        let bins = table.bins(record.id());
        if bins.is_empty() {
            trace!("UNBINNED\t{}", record.id());
            summary.skipped_records += 1;
            continue;
        }
        summary.assigned_records += 1;
        let record = match config.rewrite_ids {
            true => {
                let id = rewrite_id(record.id(), sample);
                fasta::Record::with_attrs(&id, None, record.seq())
            }
            false => record,
        };
        for bin in bins.iter() {
            let (path, stat) = stats.entry(bin.as_str()).or_insert_with(|| {
                let path = output_path(output_dir, sample, bin);
                let stat = BinStat {
                    bin: bin.clone(),
                    path: path.to_string_lossy().to_string(),
                    records: 0,
                    bases: 0,
                };
                (path, stat)
            });
            sink.append(path.as_path(), &record)?;
            stat.records += 1;
            stat.bases += record.seq().len();
        }
    }
    summary.bins = stats.into_values().map(|(_, stat)| stat).collect();
    Ok(summary)
}

/// Destination of the binned records.
pub trait BinSink {
    /// Append `record` to the end of `path`, creating it if needed.
    fn append(&mut self, path: &Path, record: &fasta::Record) -> std::io::Result<()>;
    /// Flush everything written so far.
    fn finish(&mut self) -> std::io::Result<()>;
}

/// Open, write, and close for each record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReopenSink;

impl BinSink for ReopenSink {
    fn append(&mut self, path: &Path, record: &fasta::Record) -> std::io::Result<()> {
        let file = open_append(path)?;
        let mut wtr = fasta::Writer::new(file);
        wtr.write_record(record)?;
        wtr.flush()
    }
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Keep a writer for each output file.
#[derive(Default)]
pub struct CachedSink {
    writers: HashMap<PathBuf, fasta::Writer<std::fs::File>>,
}

#[cfg(test)]
impl CachedSink {
    pub fn len(&self) -> usize {
        self.writers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl BinSink for CachedSink {
    fn append(&mut self, path: &Path, record: &fasta::Record) -> std::io::Result<()> {
        use std::collections::hash_map::Entry;
        let wtr = match self.writers.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!("OPEN\t{:?}", path);
                entry.insert(fasta::Writer::new(open_append(path)?))
            }
        };
        wtr.write_record(record)
    }
    fn finish(&mut self) -> std::io::Result<()> {
        for (path, mut wtr) in self.writers.drain() {
            trace!("CLOSE\t{:?}", path);
            wtr.flush()?;
        }
        Ok(())
    }
}

fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
}
