mod club;
mod fixture;
mod match_detail;

pub use club::*;
pub use fixture::*;
pub use match_detail::*;
