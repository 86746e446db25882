mod keywords;

pub use keywords::*;
