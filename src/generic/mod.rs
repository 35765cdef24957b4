pub mod map;

pub use map::IntervalMap;
