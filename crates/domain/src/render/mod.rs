//! Template rendering for the generated glue files.
//!
//! Every renderer is a pure function of a [`GrammarConfig`]: output bytes
//! contain no timestamps or environment-dependent data, so re-running a
//! generation pass over the same configuration is idempotent.

mod cmake;
mod interop;
mod stubs;

pub use cmake::render_cmake_lists;
pub use interop::render_interop_def;
pub use stubs::{render_source_stubs, SourceStub};
