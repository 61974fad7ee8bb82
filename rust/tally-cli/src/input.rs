//! Turning command-line tokens and input files into typed values.

use crate::error::CliError;
use std::path::Path;
use std::str::FromStr;

/// Parse each token as `T`, failing on the first bad one.
pub fn parse_values<T>(tokens: &[String]) -> Result<Vec<T>, CliError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    tokens
        .iter()
        .map(|token| {
            token.parse::<T>().map_err(|e| CliError::InvalidNumber {
                token: token.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Collect value tokens from the argument list and, if given, a file of
/// whitespace-separated values. Argument tokens come first.
pub fn gather_tokens(args: &[String], file: Option<&Path>) -> Result<Vec<String>, CliError> {
    let mut tokens = args.to_vec();
    if let Some(path) = file {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tokens.extend(content.split_whitespace().map(str::to_string));
        tracing::debug!(path = %path.display(), total = tokens.len(), "read input file");
    }
    if tokens.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(tokens)
}
