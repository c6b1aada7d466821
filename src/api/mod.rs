pub mod groupbuys;

pub use groupbuys::{parse_groupbuy, GroupBuyClient};
