//! Shared constants for end-to-end tests
//!
//! When the fixture catalog changes, update only this file and `fixtures.rs`.
#![allow(dead_code)]

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "Toolbox" 1.0, oldest file of the tools category
pub const TOOL_OLD_ID: &str = "toolbox-1";

/// "Toolbox" 2.0, explicitly related to the "Toolbox Manual"
pub const TOOL_NEW_ID: &str = "toolbox-2";

/// "Toolbox Nightly", newest file of the tools category
pub const TOOL_NIGHTLY_ID: &str = "toolbox-nightly";

/// "Space Shooter", the only game
pub const GAME_ID: &str = "space-shooter";

/// "Toolbox Manual", documentation linked to two toolbox releases and a dangling id
pub const MANUAL_ID: &str = "toolbox-manual";

/// Referenced by the manual, never defined
pub const DANGLING_ID: &str = "toolbox-0";

pub const TOOLS_CATEGORY: &str = "tools";
pub const GAMES_CATEGORY: &str = "games";
pub const DOCS_CATEGORY: &str = "docs";

pub const TOOL_NEW_TITLE: &str = "Toolbox";
pub const GAME_TITLE: &str = "Space Shooter";

pub const FIXTURE_FILES_COUNT: usize = 5;

// ============================================================================
// Timing
// ============================================================================

/// Max time to wait for the test server to answer its first request
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Timeout applied to every test request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
