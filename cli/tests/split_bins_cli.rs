use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_inputs(dir: &Path) {
    let contigs = ">ctg1\nACGTACGT\n>ctg2 second\nGGGGCCCC\n>ctg3\nTTTT\n";
    std::fs::write(dir.join("assembly.fasta"), contigs).expect("contigs should be writable");
    let binning = "ctg1 : binA\nctg2 : binA binB\n";
    std::fs::write(dir.join("binning.tsv"), binning).expect("binning should be writable");
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path should be utf-8")
}

#[test]
fn splits_into_bins() {
    let d = tempdir().expect("tempdir should be creatable");
    write_inputs(d.path());
    let out_dir = d.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    let summary = d.path().join("summary.json");
    let out = Command::new(env!("CARGO_BIN_EXE_split_bins"))
        .args([
            path_str(&d.path().join("assembly.fasta")),
            path_str(&d.path().join("binning.tsv")),
            path_str(&out_dir),
            "--summary",
            path_str(&summary),
        ])
        .output()
        .expect("split_bins should run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let bin_a = std::fs::read_to_string(out_dir.join("assembly-binA.fasta")).unwrap();
    assert_eq!(bin_a, ">ctg1\nACGTACGT\n>ctg2 second\nGGGGCCCC\n");
    let bin_b = std::fs::read_to_string(out_dir.join("assembly-binB.fasta")).unwrap();
    assert_eq!(bin_b, ">ctg2 second\nGGGGCCCC\n");
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 2);
    let summary: definitions::SplitSummary =
        serde_json::from_reader(std::fs::File::open(&summary).unwrap()).unwrap();
    assert_eq!(summary.sample, "assembly");
    assert_eq!(summary.skipped_records, 1);
    assert_eq!(summary.distinct_bins(), 2);
}

#[test]
fn profile_options() {
    let d = tempdir().expect("tempdir should be creatable");
    write_inputs(d.path());
    let out_dir = d.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    let profile = d.path().join("profile.toml");
    std::fs::write(&profile, "rewrite_ids = true\nkeep_open = true\n").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_split_bins"))
        .args([
            path_str(&d.path().join("assembly.fasta")),
            path_str(&d.path().join("binning.tsv")),
            path_str(&out_dir),
            "--profile",
            path_str(&profile),
        ])
        .output()
        .expect("split_bins should run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let bin_b = std::fs::read_to_string(out_dir.join("assembly-binB.fasta")).unwrap();
    assert_eq!(bin_b, ">assembly-ctg2\nGGGGCCCC\n");
}

#[test]
fn prints_usage_without_arguments() {
    let d = tempdir().expect("tempdir should be creatable");
    write_inputs(d.path());
    let out = Command::new(env!("CARGO_BIN_EXE_split_bins"))
        .args([path_str(&d.path().join("assembly.fasta"))])
        .output()
        .expect("split_bins should run");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn fails_on_missing_output_directory() {
    let d = tempdir().expect("tempdir should be creatable");
    write_inputs(d.path());
    let out = Command::new(env!("CARGO_BIN_EXE_split_bins"))
        .args([
            path_str(&d.path().join("assembly.fasta")),
            path_str(&d.path().join("binning.tsv")),
            path_str(&d.path().join("missing")),
        ])
        .output()
        .expect("split_bins should run");
    assert!(!out.status.success());
    assert!(!d.path().join("missing").exists());
}

#[test]
fn strict_binning() {
    let d = tempdir().expect("tempdir should be creatable");
    write_inputs(d.path());
    std::fs::write(d.path().join("binning.tsv"), "ctg1 : binA\nctg2\n").unwrap();
    let out_dir = d.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    let run = |strict: bool| {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_split_bins"));
        cmd.args([
            path_str(&d.path().join("assembly.fasta")),
            path_str(&d.path().join("binning.tsv")),
            path_str(&out_dir),
        ]);
        if strict {
            cmd.arg("--strict");
        }
        cmd.output().expect("split_bins should run")
    };
    let out = run(true);
    assert!(!out.status.success());
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
    let out = run(false);
    assert!(out.status.success());
    let bin_a = std::fs::read_to_string(out_dir.join("assembly-binA.fasta")).unwrap();
    assert_eq!(bin_a, ">ctg1\nACGTACGT\n");
}
