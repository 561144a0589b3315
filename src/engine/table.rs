//! Rule storage and key lookup.
//!
//! A [`Table`] holds its rules in declaration order and never changes after
//! construction. Lookup is a single forward scan: the first rule whose key
//! claims the queried token wins, so priority is exactly declaration order
//! and selection never backtracks.
//!
//! Alongside the rules, construction precomputes a [`KeyKinds`] mask of which
//! key variants the table declares. The mask lets the end-of-input lookup
//! bail out without scanning when no `NoArg` rule exists, and gives the
//! dispatch trace a one-line summary of the table's shape.

use crate::{Key, Rule};

bitflags::bitflags! {
    /// Which key variants a table declares.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyKinds: u8 {
        const LITERAL   = 1 << 0;
        const PREDICATE = 1 << 1;
        const NO_ARG    = 1 << 2;
        const ANY_ARG   = 1 << 3;
    }
}

/// An ordered, immutable collection of dispatch rules.
///
/// Build one per command level, directly from a `Vec<Rule>` or with the
/// [`table!`](crate::table) macro, and dispatch token sequences through it.
/// Tables are independent of each other; nesting happens only through handler
/// composition, where a handler owns a child table and re-enters the engine
/// on its own view.
#[derive(Debug)]
pub struct Table {
    rules: Vec<Rule>,
    kinds: KeyKinds,
}

impl Table {
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut kinds = KeyKinds::empty();
        for rule in &rules {
            kinds |= match rule.key {
                Key::Literal(_) => KeyKinds::LITERAL,
                Key::Predicate(_) => KeyKinds::PREDICATE,
                Key::NoArg => KeyKinds::NO_ARG,
                Key::AnyArg => KeyKinds::ANY_ARG,
            };
        }
        Table { rules, kinds }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Summary of which key variants this table declares.
    pub fn key_kinds(&self) -> KeyKinds {
        self.kinds
    }

    /// First rule whose key claims `token`, scanning in declaration order.
    pub(crate) fn find(&self, token: &str, allow_wildcard: bool) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key.matches(token, allow_wildcard))
    }

    /// First rule keyed on end-of-input, if the table declares one.
    pub(crate) fn find_end(&self) -> Option<&Rule> {
        if !self.kinds.contains(KeyKinds::NO_ARG) {
            return None;
        }
        self.rules.iter().find(|rule| rule.key.matches_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, table};

    fn probe(id: usize) -> impl Fn(&[String]) -> Outcome {
        move |_: &[String]| Outcome::Remaining(id)
    }

    fn selected(table: &Table, token: &str, allow_wildcard: bool) -> Option<usize> {
        let view = vec![token.to_string()];
        table.find(token, allow_wildcard).map(|rule| match (rule.handler)(&view) {
            Outcome::Remaining(id) => id,
            Outcome::Invalid => usize::MAX,
        })
    }

    fn is_digits(token: &str) -> bool {
        !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn literal_matches_byte_exact() {
        let key = Key::Literal("f0".to_string());
        assert!(key.matches("f0", false));
        assert!(!key.matches("F0", true));
        assert!(!key.matches("f0 ", true));
    }

    #[test]
    fn predicate_matches_by_verdict() {
        let key = Key::Predicate(is_digits);
        assert!(key.matches("42", false));
        assert!(!key.matches("4x2", true));
    }

    #[test]
    fn noarg_never_matches_real_tokens() {
        let key = Key::NoArg;
        assert!(!key.matches("anything", true));
        assert!(!key.matches("", true));
        assert!(key.matches_end());
    }

    #[test]
    fn anyarg_is_contextual() {
        let key = Key::AnyArg;
        assert!(key.matches("whatever", true));
        assert!(!key.matches("whatever", false));
        assert!(!key.matches_end());
    }

    #[test]
    fn first_declared_match_wins() {
        // "7" is claimed by both the predicate and the wildcard; the literal
        // never matches it. Declaration order decides.
        let t = table! {
            "f0" => probe(0),
            pred is_digits => probe(1),
            anyarg => probe(2),
        };
        assert_eq!(selected(&t, "7", true), Some(1));
        assert_eq!(selected(&t, "f0", true), Some(0));
        assert_eq!(selected(&t, "other", true), Some(2));
    }

    #[test]
    fn disabled_wildcard_yields_later_rules() {
        let t = table! {
            anyarg => probe(0),
            "x" => probe(1),
        };
        assert_eq!(selected(&t, "x", true), Some(0));
        assert_eq!(selected(&t, "x", false), Some(1));
        assert_eq!(selected(&t, "y", false), None);
    }

    #[test]
    fn find_end_selects_first_noarg_rule() {
        let t = table! {
            "x" => probe(0),
            noarg => probe(1),
            noarg => probe(2),
        };
        let view = vec!["x".to_string()];
        let rule = t.find_end().unwrap();
        assert_eq!((rule.handler)(&view), Outcome::Remaining(1));
    }

    #[test]
    fn find_end_without_noarg_rule() {
        let t = table! {
            "x" => probe(0),
            anyarg => probe(1),
        };
        assert!(t.find_end().is_none());
    }

    #[test]
    fn key_kinds_summarize_declarations() {
        let t = table! {
            "x" => probe(0),
            pred is_digits => probe(1),
            noarg => probe(2),
            anyarg => probe(3),
        };
        assert_eq!(t.key_kinds(), KeyKinds::all());
        assert_eq!(t.len(), 4);

        let bare = table! {
            "x" => probe(0),
        };
        assert_eq!(bare.key_kinds(), KeyKinds::LITERAL);

        let empty = Table::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.key_kinds(), KeyKinds::empty());
    }
}
