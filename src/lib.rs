//! Pollboard - Main Library
//!
//! Pollboard is a small poll-hosting HTTP API built with Rust and Axum.
//! Its defining feature is a centralized error-handling discipline: domain
//! operations return typed results instead of panicking, and a single
//! boundary layer converts every failure into a stable, sanitized
//! problem-details response.
//!
//! # Overview
//!
//! This library provides the core functionality for Pollboard, including:
//! - Poll creation with title-uniqueness enforcement
//! - Vote casting with one-vote-per-voter enforcement
//! - A process-wide registry of domain error codes
//! - Problem-details (`application/problem+json`) error responses
//! - A single panic boundary wrapping the whole request pipeline
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`shared`** - Domain types used across the crate
//!   - `DomainError` constants grouped per entity (polls, votes)
//!   - The `DomainResult` outcome type
//!   - Poll and option models with validation
//!
//! - **`error`** - HTTP-facing error translation
//!   - `ProblemDocument` response shape
//!   - `ApiError` and caller-declared `StatusMap` tables
//!
//! - **`middleware`** - Request-pipeline middleware
//!   - The panic boundary layer
//!
//! - **`polls`** - Poll store and HTTP handlers
//!
//! - **`routes`** - Router assembly
//!
//! - **`server`** - Configuration, state, and app initialization
//!
//! # Error Handling
//!
//! Expected failures (validation, not-found, conflicts) never panic. They
//! travel as [`shared::result::DomainResult`] values carrying a
//! [`shared::error::DomainError`] from the registry, and each handler maps
//! the failure code to an HTTP status through its own explicit
//! [`error::types::StatusMap`] table. Anything that does panic is caught
//! exactly once, at the boundary layer, logged, and answered with a fixed
//! 500 document that leaks no internal detail.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pollboard::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app();
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

/// Shared domain types and the error registry
pub mod shared;

/// HTTP error translation (problem documents, status maps)
pub mod error;

/// Request-pipeline middleware
pub mod middleware;

/// Poll store and HTTP handlers
pub mod polls;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::types::{ApiError, ProblemDocument, StatusMap};
pub use server::init::create_app;
pub use shared::error::DomainError;
pub use shared::result::DomainResult;
