extern crate self as argtree;

use std::fmt;

#[macro_use]
mod macros;
mod engine;

pub use engine::{KeyKinds, Table};

// --- Keys -------------------------------------------------------------------

/// Predicate over a single token.
///
/// Predicates must be safe to call repeatedly: the engine gives no guarantee
/// on invocation count or order beyond table declaration order, and may query
/// the same token several times during one dispatch call.
pub type Predicate = fn(&str) -> bool;

/// Pattern deciding whether a rule applies to the current token.
///
/// A key is exactly one of these variants at all times; matching dispatches
/// on the variant, never on representation tricks.
pub enum Key {
    /// Matches a token by exact (byte-equal) string comparison.
    Literal(String),
    /// Matches a token when the predicate returns true.
    Predicate(Predicate),
    /// Matches only the end-of-input position at this dispatch level, never a
    /// real token.
    NoArg,
    /// Catch-all: matches any real token, but only when the lookup permits
    /// wildcard matching. The permission flag belongs to the lookup, not to
    /// the key (see [`Table::dispatch`] vs [`Table::dispatch_main`]).
    AnyArg,
}

impl Key {
    /// Whether this key claims `token`.
    ///
    /// `allow_wildcard` is supplied by the dispatch loop: the first lookup of
    /// any table invocation always passes `true`; later lookups pass the
    /// table's stickiness policy.
    pub fn matches(&self, token: &str, allow_wildcard: bool) -> bool {
        match self {
            Key::Literal(s) => s == token,
            Key::Predicate(test) => test(token),
            Key::NoArg => false,
            Key::AnyArg => allow_wildcard,
        }
    }

    /// The synthetic end-of-input query. True only for [`Key::NoArg`].
    pub fn matches_end(&self) -> bool {
        matches!(self, Key::NoArg)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Key::Predicate(_) => f.write_str("Predicate(<function>)"),
            Key::NoArg => f.write_str("NoArg"),
            Key::AnyArg => f.write_str("AnyArg"),
        }
    }
}

// --- Rules ------------------------------------------------------------------

/// Handler invoked when its rule's key matches.
///
/// The slice is the handler's read-only view of the remaining tokens:
/// `view[0]` is always the token that selected the handler, and `view.len()`
/// is the remaining count (never zero). Handlers report how much of the view
/// they consumed through the returned [`Outcome`].
pub type Handler = Box<dyn Fn(&[String]) -> Outcome>;

/// A dispatch rule: a [`Key`] paired with the [`Handler`] to run when the key
/// matches. Rules live in a [`Table`] in declaration order; the first match
/// wins.
pub struct Rule {
    pub(crate) key: Key,
    pub(crate) handler: Handler,
}

impl Rule {
    pub fn new(key: Key, handler: impl Fn(&[String]) -> Outcome + 'static) -> Self {
        Rule { key, handler: Box::new(handler) }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("key", &self.key).field("handler", &"<function>").finish()
    }
}

// --- Outcomes ---------------------------------------------------------------

/// Result of one handler invocation, and of a whole dispatch call.
///
/// `Remaining(n)` means success with `n` tokens still unconsumed; the engine
/// advances past the `view.len() - n` tokens the handler consumed and keeps
/// dispatching. `Remaining(0)` and [`Outcome::Invalid`] both stop the loop
/// immediately and propagate unchanged through every nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Success; how many tokens are still unconsumed.
    Remaining(usize),
    /// Terminal failure: the argument was malformed or unacceptable. No
    /// further rule lookups or handler invocations happen anywhere in the
    /// dispatch call once this is returned.
    Invalid,
}

impl Outcome {
    /// Named form of `Remaining(0)` for top-level readability.
    pub const SUCCESS: Outcome = Outcome::Remaining(0);

    /// Standard return for a handler that consumed its triggering token plus
    /// `parsed` following arguments out of a view of `len` tokens.
    ///
    /// Panics when `1 + parsed > len`: a handler cannot consume tokens it was
    /// never shown, and that is a bug in the handler, not a runtime
    /// condition.
    pub fn after(len: usize, parsed: usize) -> Outcome {
        match len.checked_sub(1 + parsed) {
            Some(left) => Outcome::Remaining(left),
            None => panic!("handler consumed {} tokens from a view of {len}", 1 + parsed),
        }
    }

    pub fn is_invalid(self) -> bool {
        self == Outcome::Invalid
    }
}
