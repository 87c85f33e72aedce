// Utility functions
// Helper functions for common operations

pub mod format;

pub use format::truncate_url;
