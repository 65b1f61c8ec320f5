use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
pub fn split_bins_parser() -> Command {
    Command::new("split_bins")
        .version("0.1")
        .about("Split contigs into bins. Each bin is written to <output_directory>/<sample>-<bin>.fasta.")
        .arg(
            Arg::new("contigs")
                .value_name("CONTIGS")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Input FASTA file. The file name without extension is the sample name."),
        )
        .arg(
            Arg::new("binning_info")
                .value_name("BINNING_INFO")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Binning file. Each line is `<contig> : <bin> <bin>...` or `<contig>\\t<bin>`."),
        )
        .arg(
            Arg::new("output_directory")
                .value_name("OUTPUT_DIRECTORY")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Output directory. It should exist."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("rewrite_ids")
                .long("rewrite_ids")
                .action(ArgAction::SetTrue)
                .help("Rename contigs into <sample>-<number> and drop descriptions."),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Abort on malformed lines in the binning file."),
        )
        .arg(
            Arg::new("keep_open")
                .long("keep_open")
                .action(ArgAction::SetTrue)
                .help("Keep output files open during the run instead of re-opening them for each contig."),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .value_name("JSON")
                .value_parser(value_parser!(PathBuf))
                .help("Write the summary of the run in JSON."),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("TOML")
                .value_parser(value_parser!(PathBuf))
                .help("Options in a TOML file. Flags in the command line are added on top of it."),
        )
}
