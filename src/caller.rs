//! Compile-time resolution of the enclosing function's path.
//!
//! [`function_name!`](crate::function_name) names the function it is expanded
//! in, which makes it a deterministic default for an operation label. The
//! op-defaulting macros [`attach_code!`](crate::attach_code) and
//! [`tag_op!`](crate::tag_op) use it to label a node with the function that
//! performed the wrap.

const PROBE_SUFFIX: &str = "::__error_trail_probe";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Turns the type name of the probe function emitted by
/// [`function_name!`](crate::function_name) into the path of the function
/// enclosing it.
///
/// Closure and async-block segments are dropped, so a probe expanded inside
/// a closure reports the named function the closure lives in.
///
/// # Examples
///
/// ```
/// use error_trail::caller::enclosing_function;
///
/// assert_eq!(
///     enclosing_function("app::users::load::{{closure}}::__error_trail_probe"),
///     "app::users::load",
/// );
/// ```
pub fn enclosing_function(probe: &'static str) -> &'static str {
    let mut name = probe.strip_suffix(PROBE_SUFFIX).unwrap_or(probe);
    while let Some(outer) = name.strip_suffix(CLOSURE_SUFFIX) {
        name = outer;
    }
    name
}
