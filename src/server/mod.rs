//! HTTP backend for the football manager.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: existence checks, conflicts, goal tally
//! - **Data Layer** (`data/`) - SeaORM queries, transactions and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared database connection and token keys
//! - **Startup** (`startup`) - Database, migrations, tracing and admin bootstrap
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** checks the bearer token and role, converts the DTO to params
//! 3. **Service** validates references and invariants, then calls the data layer
//! 4. **Data** runs the queries, inside a transaction for multi-row writes
//! 5. **Controller** converts the returned domain model into a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
