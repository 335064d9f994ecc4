//! Distance and similarity between the columns of a delimited integer file.
mod distance;
mod similarity;

pub use distance::{total_distance, tuple_distance, SortedColumns};
pub use similarity::{similarity_score, FrequencyTable};
