// Experience timeline: date parsing, interval merging, experience bands.
// Everything here is pure; callers pass the evaluation date explicitly.

pub mod bucket;
pub mod dates;
pub mod handlers;
pub mod merger;

pub use bucket::{bucket, ExperienceBucket};
pub use merger::{aggregate, aggregate_raw, DateInterval, Duration, RawInterval};
