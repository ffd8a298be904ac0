// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Click-driven sequencing for a rotating-stage text presentation.
//!
//! A ring of subject panels circles a stage. Each click either reveals the
//! next node's content panel (dropped from above) or releases the current
//! subject to physics and rotates the remaining ring one slot toward the
//! front. Physics is purely cosmetic; the sequencing is deterministic and
//! frame-counted.
//!
//! # Key entry points
//!
//! - [`engine::PresentationEngine`] - owns everything and runs one frame at
//!   a time
//! - [`presentation::PresentationStateMachine`] - the click/tick sequencer
//! - [`animation::Interpolator`] - frame-stepped eased progress
//! - [`physics::PhysicsBackend`] - the contract a physics engine fulfils;
//!   `RapierWorld` (feature `rapier`, default) and
//!   [`physics::KinematicWorld`] implement it
//! - [`options::Options`] - node list and tuning, loadable from TOML
//!
//! Rendering is left to the host: read panel transforms from
//! [`stage::Stage::visuals`] after each [`engine::PresentationEngine::frame`],
//! and draw the platform cord from [`stage::Stage::cord`].

pub mod animation;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod physics;
pub mod presentation;
pub mod stage;
pub mod util;
