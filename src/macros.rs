#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal,
        buckets: $buckets:expr,
        priority: $priority:expr,
        prod: |$caps:ident| $body:block
        $(,)?
    ) => {{
        fn production($caps: &::regex::Captures<'_>) -> Option<$crate::date_expr::DateExpr> $body

        $crate::Rule {
            name: $name,
            pattern: $crate::regex!($pat),
            buckets: $buckets,
            priority: $priority,
            production,
        }
    }};
}
