//! Route Configuration
//!
//! Router assembly for the poll API:
//!
//! - **`router`** - the main router with health, fallback, and layers
//! - **`api_routes`** - the `/api` poll and vote endpoints

/// Main router creation
pub mod router;

/// API route registration
pub mod api_routes;

// Re-export commonly used items
pub use router::create_router;
