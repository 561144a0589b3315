//! Token dispatch engine.
//!
//! This module is the *public entry point* for the dispatcher. A [`Table`] is
//! an ordered, immutable list of `(Key, Handler)` rules; dispatching walks a
//! read-only view of the caller's token sequence through that list until a
//! terminal condition is reached.
//!
//! ## How the parts work together
//!
//! At a high level, one dispatch call is a loop:
//!
//! ```text
//! tokens, skip ── entry checks ──┐
//!                                │  one token left?  -> NoArg lookup
//!                                │  more tokens?     -> token lookup
//!                                │                      (wildcard allowed)
//!                                v
//!                      handler(view) -> Outcome
//!                                │
//!            Remaining(0) / Invalid ──> return outcome
//!                                │
//!            Remaining(n): advance view by view.len() - n
//!                                │
//!                      re-lookup view[0]
//!                      (wildcard per stickiness policy)
//!                                │
//!               match ──> loop; no match ──> return last outcome
//! ```
//!
//! Handlers may own a nested `Table` and re-enter the engine on the view they
//! received, producing recursive dispatch trees. The remaining-token count
//! they return threads back up through every level unchanged.
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: rule storage, first-match key lookup, and the precomputed
//!   [`KeyKinds`] summary of which key variants a table declares.
//! - `dispatch.rs`: the loop above plus the three entry-point wrappers
//!   (bounded, top-level, top-level with diagnostics).
//!
//! ## Wildcard scope
//!
//! The first lookup of any table invocation always permits wildcard
//! (`AnyArg`) matching. Whether *later* lookups in the same loop permit it is
//! the entry point's policy: [`Table::dispatch`] (nested tables) says no, so
//! a sub-table wildcard catches only the token that routed control into it;
//! [`Table::dispatch_main`] (program root) says yes, so a root wildcard
//! catches every unrecognized token it walks past.
//!
//! ## Debugging
//!
//! Set `ARGTREE_DEBUG_DISPATCH=1` to print lookup, match, and consumption
//! traces to stderr.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/table.rs"]
mod table;

pub use table::{KeyKinds, Table};
