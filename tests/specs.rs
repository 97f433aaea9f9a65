//! Behavioral specifications for the tg CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes. Everything runs in simulation mode
//! against an unroutable store domain, so a compensation that tried to
//! dial the network would surface as a failed line.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// revert/
#[path = "specs/revert/session.rs"]
mod revert_session;
#[path = "specs/revert/sessions.rs"]
mod revert_sessions;
