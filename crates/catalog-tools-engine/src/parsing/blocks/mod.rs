//! # Block Parsing
//!
//! Two-phase block parsing over trimmed input lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, heading form, list marker)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the open paragraph
//!    or list run and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum
//! - **`kinds`**: Block-specific syntax (Heading, List, Paragraph)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Single forward pass, no backtracking: every line is seen once
//! - Every non-blank line ends up in exactly one block
//! - A line starting with `-` is never a colon heading

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use kinds::ListKind;
pub use types::Block;
