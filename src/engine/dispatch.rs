//! The dispatch loop and its entry points.
//!
//! `dispatch_base` is the operational core: establish the first lookup
//! (end-of-input or token), then alternate handler invocation with
//! re-lookup, advancing a shrinking slice view by however many tokens each
//! handler reports consumed. The three public wrappers differ only in
//! wildcard stickiness and in whether failures are narrated to the user.
//!
//! All failure states travel through the returned [`Outcome`]; the engine
//! raises no errors of its own. The one exception is a caller contract
//! violation (entering with nothing to dispatch, or a handler claiming more
//! tokens than its view held), which panics: that is a bug in the
//! collaborator, not a data-dependent condition.

use std::env;

use super::table::Table;
use crate::{Outcome, Rule};

impl Table {
    /// Bounded dispatch, for sub-command tables invoked from within a
    /// handler: after the first lookup, wildcard rules stop matching, so a
    /// sub-table wildcard catches only the token that routed control into
    /// this table. Returns the raw outcome for the caller to propagate.
    ///
    /// `skip` is the number of leading tokens to ignore; `tokens[skip]` is
    /// the token that triggered entry into this table.
    ///
    /// Panics when `skip >= tokens.len()`, which means the caller mis-sliced
    /// its input.
    pub fn dispatch(&self, tokens: &[String], skip: usize) -> Outcome {
        self.dispatch_base(tokens, skip, false)
    }

    /// Top-level dispatch, for the program's root table: wildcard rules stay
    /// eligible on every lookup, so a root wildcard catches each
    /// unrecognized token encountered while walking the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use argtree::{Outcome, table};
    ///
    /// let greetings = table! {
    ///     "hello" => |view: &[String]| {
    ///         println!("hello back");
    ///         Outcome::after(view.len(), 0)
    ///     },
    /// };
    ///
    /// let tokens: Vec<String> =
    ///     ["prog", "hello"].iter().map(|s| s.to_string()).collect();
    /// assert_eq!(greetings.dispatch_main(&tokens, 0), Outcome::SUCCESS);
    /// ```
    pub fn dispatch_main(&self, tokens: &[String], skip: usize) -> Outcome {
        self.dispatch_base(tokens, skip, true)
    }

    /// [`Table::dispatch_main`] plus user-visible failure reporting: on
    /// [`Outcome::Invalid`] prints `usage`; on a positive remainder prints
    /// the position and text of the first unrecognised token, then `usage`.
    /// Presentation only; the returned outcome is unaltered.
    pub fn dispatch_main_reporting(&self, tokens: &[String], skip: usize, usage: &str) -> Outcome {
        let outcome = self.dispatch_base(tokens, skip, true);
        match outcome {
            Outcome::Invalid => print!("{usage}"),
            Outcome::Remaining(left) if left > 0 => {
                let index = tokens.len() - left;
                println!("Argument number {index} (\"{}\") unrecognised.", tokens[index]);
                print!("{usage}");
            }
            _ => {}
        }
        outcome
    }

    fn dispatch_base(&self, tokens: &[String], skip: usize, wildcard_sticky: bool) -> Outcome {
        assert!(
            tokens.len() > skip,
            "dispatch entered without tokens: len = {}, skip = {skip}",
            tokens.len(),
        );

        let debug = env::var_os("ARGTREE_DEBUG_DISPATCH").is_some();
        if debug {
            eprintln!(
                "[dispatch:enter] tokens={} skip={skip} sticky={wildcard_sticky} rules={} kinds={:?}",
                tokens.len(),
                self.len(),
                self.key_kinds(),
            );
        }

        let mut view: &[String];
        let mut selected: Option<&Rule>;

        if tokens.len() - skip == 1 {
            // Only the triggering token remains; the sole candidate is an
            // end-of-input rule, invoked with a view of just that token.
            view = &tokens[skip..];
            selected = self.find_end();
            if debug {
                eprintln!("[dispatch:lookup] end-of-input matched={:?}", selected.map(|r| &r.key));
            }
        } else {
            view = &tokens[skip + 1..];
            selected = self.find(&view[0], true);
            if debug {
                eprintln!("[dispatch:lookup] token={:?} matched={:?}", view[0], selected.map(|r| &r.key));
            }
        }

        // Established before the loop so that an immediate no-match reports
        // the full remainder.
        let mut outcome = Outcome::Remaining(view.len());

        while let Some(rule) = selected {
            outcome = (rule.handler)(view);
            if debug {
                eprintln!("[dispatch:handler] view={} -> {:?}", view.len(), outcome);
            }

            let left = match outcome {
                Outcome::Invalid | Outcome::Remaining(0) => return outcome,
                Outcome::Remaining(left) => left,
            };
            let consumed = match view.len().checked_sub(left) {
                Some(consumed) => consumed,
                None => {
                    panic!("handler reported {left} tokens remaining out of a view of {}", view.len())
                }
            };

            view = &view[consumed..];
            selected = self.find(&view[0], wildcard_sticky);
            if debug {
                eprintln!("[dispatch:lookup] token={:?} matched={:?}", view[0], selected.map(|r| &r.key));
            }
        }

        outcome
    }
}
