pub mod config;
pub mod error;
pub mod logging;

pub mod archive;
pub mod area;
pub mod date;
pub mod decode;
pub mod fetch;
pub mod locator;
pub mod normalize;
pub mod persist;
pub mod pipeline;

pub use area::Area;
pub use date::RequestDate;
pub use error::{JuyoError, Result};
pub use pipeline::{FetchReport, Pipeline};
