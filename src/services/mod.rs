//! Services for series building

pub mod series;

pub use series::SeriesBuilder;
