use binsplit_cli::profile::Profile;
use definitions::SplitSummary;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = binsplit_cli::split_bins_commands::split_bins_parser().get_matches();
    let profile = match matches.get_one::<PathBuf>("profile") {
        Some(path) => Profile::from_path(path)?,
        None => Profile::default(),
    };
    let profile = profile.merge_matches(&matches);
    let level = profile.log_level();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let contigs: &PathBuf = matches.get_one("contigs").unwrap();
    let binning: &PathBuf = matches.get_one("binning_info").unwrap();
    let output_dir: &PathBuf = matches.get_one("output_directory").unwrap();
    debug!("PROFILE\t{:?}", profile);
    let config = profile.split_config();
    let summary = binsplit::split(contigs, binning, output_dir, &config)?;
    info!("SUMMARY\t{}", summary);
    if let Some(path) = profile.summary.as_ref() {
        flush_summary(&summary, path)?;
    }
    Ok(())
}

fn flush_summary(summary: &SplitSummary, path: &Path) -> std::io::Result<()> {
    debug!("Writing {:?}", path);
    let mut wtr = std::fs::File::create(path).map(BufWriter::new)?;
    serde_json::ser::to_writer_pretty(&mut wtr, summary)?;
    use std::io::Write;
    wtr.flush()
}
