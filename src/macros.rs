/// Builds a [`PatternDef`](crate::PatternDef) from named fields.
///
/// `classes` is optional and defaults to `0` (always scan). It takes raw
/// [`CharClassMask`](crate::CharClassMask) bits so definitions stay plain
/// data:
///
/// ```text
/// pattern! {
///     name: "time",
///     category: PatternCategory::DateTime,
///     fragment: r"[0-9]{1,2}:[0-9]{2}",
///     weight: 50,
///     classes: (CharClassMask::DIGITS | CharClassMask::COLON).bits(),
/// }
/// ```
#[macro_export]
macro_rules! pattern {
    (
        name: $name:expr,
        category: $category:expr,
        fragment: $fragment:expr,
        weight: $weight:expr
        $(, classes: $classes:expr)?
        $(,)?
    ) => {{
        $crate::PatternDef {
            name: String::from($name),
            fragment: String::from($fragment),
            weight: $weight,
            category: $category,
            classes: { 0 $(| $classes)? },
        }
    }};
}
