//! shape_info - area and perimeter reporting over a `Shape` trait.
//!
//! - **shape**: the `Shape` contract and its two variants, `Rectangle` and `Circle`
//! - **report**: formatting of a shape's metrics to any writer

pub mod error;
pub mod report;
pub mod shape;

pub use error::{ReportError, Result};
pub use report::{format_metric, print_shape_info, write_report, write_shape_info};
pub use shape::{Circle, Rectangle, Shape, PI_APPROX};
