mod record;
mod status;
mod timestamp;

pub use record::GroupBuyRecord;
pub use status::GroupBuyStatus;
pub use timestamp::{backend_offset, parse_timestamp, Boundary, BACKEND_OFFSET_SECS};
