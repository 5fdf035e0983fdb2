pub mod broad;
pub mod detection;
pub mod info;
mod sat;

// Re-export key types
pub use broad::check_broad;
pub use detection::check_narrow;
pub use info::CollisionInfo;
