use std::ffi::{OsStr, OsString};
use std::path::Path;

/// The name of the sample, i.e., the file name without the last extension.
/// `/data/assembly.fasta` -> `assembly`, `reads.contigs.fa` -> `reads.contigs`.
/// The name does not need to be UTF-8.
pub fn sample_name<P: AsRef<Path>>(path: P) -> std::io::Result<OsString> {
    let path = path.as_ref();
    match path.file_stem() {
        Some(stem) => Ok(stem.to_os_string()),
        None => {
            let msg = format!("can not determine the sample name of {:?}", path);
            Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, msg))
        }
    }
}

/// Contig ID prefixed by the sample.
/// The number of an assembler-style ID is kept (`NODE_12_length_500_cov_3.1` -> `{sample}-12`),
/// otherwise the whole ID is used.
/// A non UTF-8 sample name is converted lossily.
pub fn rewrite_id(id: &str, sample: &OsStr) -> String {
    let sample = sample.to_string_lossy();
    match id.split('_').nth(1).filter(|num| !num.is_empty()) {
        Some(num) => format!("{}-{}", sample, num),
        None => format!("{}-{}", sample, id),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn strip_last_extension() {
        let name = |path: &str| sample_name(path).unwrap();
        assert_eq!(name("/data/assembly.fasta").as_os_str(), OsStr::new("assembly"));
        assert_eq!(name("reads.contigs.fa").as_os_str(), OsStr::new("reads.contigs"));
        assert_eq!(name("sample1").as_os_str(), OsStr::new("sample1"));
    }
    #[test]
    fn no_file_name() {
        let err = sample_name("/").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
    #[cfg(unix)]
    #[test]
    fn non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;
        let path = Path::new(OsStr::from_bytes(b"/data/asm\xff.fasta"));
        let name = sample_name(path).unwrap();
        assert_eq!(name.as_bytes(), b"asm\xff");
    }
    #[test]
    fn rewrite() {
        let s1 = OsStr::new("s1");
        assert_eq!(rewrite_id("NODE_12_length_500_cov_3.1", s1), "s1-12");
        assert_eq!(rewrite_id("ctg1", s1), "s1-ctg1");
        assert_eq!(rewrite_id("ctg_", s1), "s1-ctg_");
    }
}
