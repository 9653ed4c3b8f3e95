pub mod word_comparer;
pub use word_comparer::*;

pub mod wildcard_error;
pub use wildcard_error::*;

pub mod wildcard;
pub use wildcard::*;

pub mod classifier_config;
pub use classifier_config::*;

pub mod classifier;
pub use classifier::*;
