pub mod ticker;

pub use ticker::CountdownTicker;
