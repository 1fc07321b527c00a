//! Integration tests for fleetop
//!
//! These tests spawn the actual binary and test end-to-end behavior. Sessions
//! are never opened: dispatch tests use `--dry-run`, and refresh tests point
//! the provisioner at a throwaway shell script.

mod dispatch_command;
