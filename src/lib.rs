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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Arc-rotate camera framing and idle elevation recentering.
//!
//! A [`framing::FramingBehavior`] attaches to an
//! [`camera::ArcRotateCamera`] and does two things:
//!
//! - frames a target mesh by transitioning the orbit radius until the
//!   target's bounding sphere fits the frustum
//! - after the user has been idle for a while, lifts a camera that was
//!   dragged below the ground plane back to a default elevation
//!
//! User input always wins: any pointer press or inertial motion cancels
//! autonomous transitions on the same frame.
//!
//! # Key entry points
//!
//! - [`framing::FramingBehavior`] - attach/detach, `zoom_on_mesh`,
//!   configuration accessors
//! - [`framing::geometry`] - pure radius and frustum math
//! - [`scene::Scene`] - host clock, pointer channel and animation engine
//! - [`options::FramingOptions`] - TOML presets and JSON schema
//!
//! # Frame order
//!
//! [`scene::Scene::render_frame`] advances running transitions, then runs
//! [`camera::ArcRotateCamera::check_inputs`], whose observers include the
//! framing tick.

pub mod animation;
pub mod camera;
pub mod error;
pub mod framing;
pub mod options;
pub mod scene;
pub mod util;

pub use error::FramingError;
pub use framing::{
    CameraBehavior, FramingBehavior, FramingMode, FramingPhase, ZoomRequest,
};
