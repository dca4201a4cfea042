pub mod randomized;

pub use randomized::*;
