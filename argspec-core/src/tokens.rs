//! Token sources.

/// The process invocation arguments without the executable path.
///
/// Arguments that are not valid Unicode are converted lossily.
pub fn from_env() -> Vec<String> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Owned tokens from any sequence of string-like values
pub fn from_iter<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}
