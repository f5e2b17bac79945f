//! Caption text handling: cleaning and segmentation into statements.
pub mod normalize;
pub mod segmenter;

pub use normalize::{clean_fragment, collapse_whitespace, is_terminal_punctuation_only};
pub use segmenter::segment;
