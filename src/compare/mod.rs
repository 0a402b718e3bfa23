pub mod table;

pub use table::{
    Channel, ComparisonRow, ComparisonTable, HighlightSpec, build, highlight, score_delta,
};
