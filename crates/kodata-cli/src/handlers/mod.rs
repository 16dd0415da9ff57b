mod context;

pub mod browse;
pub mod catalog;
pub mod changelog;
pub mod filters;
pub mod stats;
pub mod trends;

pub use context::HandlerContext;
