#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a dispatch [`Table`](crate::Table) from ordered `key => handler`
/// entries. Declaration order is priority order: the first matching entry
/// wins.
///
/// Entry forms:
///
/// - `"literal" => handler`: exact token match
/// - `pred function => handler`: predicate match
/// - `noarg => handler`: end-of-input match
/// - `anyarg => handler`: wildcard match
#[macro_export]
macro_rules! table {
    ( $($entries:tt)* ) => {
        $crate::Table::new($crate::__table_entries!([] $($entries)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __table_entries {
    ( [ $($acc:expr,)* ] ) => { vec![ $($acc,)* ] };
    ( [ $($acc:expr,)* ] $lit:literal => $handler:expr $(, $($rest:tt)*)? ) => {
        $crate::__table_entries!(
            [ $($acc,)* $crate::Rule::new($crate::Key::Literal($lit.into()), $handler), ]
            $($($rest)*)?
        )
    };
    ( [ $($acc:expr,)* ] pred $test:expr => $handler:expr $(, $($rest:tt)*)? ) => {
        $crate::__table_entries!(
            [ $($acc,)* $crate::Rule::new($crate::Key::Predicate($test), $handler), ]
            $($($rest)*)?
        )
    };
    ( [ $($acc:expr,)* ] noarg => $handler:expr $(, $($rest:tt)*)? ) => {
        $crate::__table_entries!(
            [ $($acc,)* $crate::Rule::new($crate::Key::NoArg, $handler), ]
            $($($rest)*)?
        )
    };
    ( [ $($acc:expr,)* ] anyarg => $handler:expr $(, $($rest:tt)*)? ) => {
        $crate::__table_entries!(
            [ $($acc,)* $crate::Rule::new($crate::Key::AnyArg, $handler), ]
            $($($rest)*)?
        )
    };
}
