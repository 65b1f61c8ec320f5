pub mod annotation;
pub mod sample;
pub mod split_bins;
#[macro_use]
extern crate log;

pub use annotation::{load_annotation, AnnotationConfig};
pub use split_bins::{split, SplitConfig};
