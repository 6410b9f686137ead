pub mod pdf_merge;

pub use pdf_merge::LopdfMerger;
