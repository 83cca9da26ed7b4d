//! src/error.rs

/// Renders `e` as a headline, then one `Caused by:` entry per `source()`.
///
/// Used as the `Debug` body of the crate's error enums so that a failing
/// stage prints the whole chain on exit.
pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    std::iter::successors(e.source(), |cause| cause.source())
        .try_for_each(|cause| writeln!(f, "Caused by:\n\t{cause}"))
}
