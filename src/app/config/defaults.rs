// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Server**: Origins and proxy prefixes
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Origin the shell is served from.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000/";

/// Backend origin that proxied paths resolve to.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8000";

/// Path prefixes forwarded to the backend.
pub const DEFAULT_PROXY_PREFIXES: [&str; 2] = ["/api", "/webhook"];

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
