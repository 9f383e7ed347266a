//! Integration tests for Tangelo.
//!
//! The tests in `tests/` drive the store end to end through the public
//! service APIs against a throwaway data directory, exactly as the CLI
//! wires them up. No network, no external services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tangelo-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
