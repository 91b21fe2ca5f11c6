pub mod formatting;
pub mod time;

pub use formatting::minutes_to_readable;
pub use time::week_key;
