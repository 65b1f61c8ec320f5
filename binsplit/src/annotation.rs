//! Loading binning assignments.
//!
//! Each line assigns one contig to one or more bins. Two layouts are accepted:
//! ```text
//! NODE_1_length_5000_cov_10 : CAG1 CAG7
//! NODE_2_length_4100_cov_12	CAG3
//! ```
//! A contig may appear on several lines; its bins accumulate.
use definitions::BinningTable;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// If true, a malformed line is an error. Otherwise it is reported and skipped.
    pub strict: bool,
}

impl AnnotationConfig {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

pub fn load_annotation<P: AsRef<Path>>(
    path: P,
    config: &AnnotationConfig,
) -> std::io::Result<BinningTable> {
    let path = path.as_ref();
    debug!("Opening {:?}", path);
    let reader = std::fs::File::open(path).map(BufReader::new)?;
    let table = parse_annotation(reader, config)?;
    debug!("BINNING\t{}\t{}", table.len(), table.bin_labels().len());
    Ok(table)
}

pub fn parse_annotation<R: BufRead>(
    reader: R,
    config: &AnnotationConfig,
) -> std::io::Result<BinningTable> {
    let mut table = BinningTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.trim_start().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some((id, bins)) => {
                for bin in bins {
                    table.insert(id, bin);
                }
            }
            None if config.strict => {
                let msg = format!("malformed binning record at line {}: {}", idx + 1, line);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, msg));
            }
            None => warn!("SKIP\t{}\t{}", idx + 1, line),
        }
    }
    Ok(table)
}

// `id : bin bin ...` or `id<whitespace>bin bin ...`.
fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let (id, rest) = match line.split_once(" : ") {
        Some((id, rest)) => (id.trim(), rest),
        None => {
            let line = line.trim_start();
            let id = line.split_whitespace().next()?;
            (id, &line[id.len()..])
        }
    };
    let bins: Vec<_> = rest.split_whitespace().collect();
    if id.is_empty() || bins.is_empty() {
        None
    } else {
        Some((id, bins))
    }
}
