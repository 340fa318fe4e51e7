// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the gallery depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for the page elements and the
//!   keyboard capability the gallery controller is bound to
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer renders from the infrastructure adapters

pub mod port;
