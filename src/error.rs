//! Error types for the Pokedex host
//!
//! The cache itself never fails; these cover fetching, decoding and user input.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for commands and API calls.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The response body was not the expected JSON
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("provide a {what} for the {command} command")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// Writing command output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    pub fn missing_argument(command: &'static str, what: &'static str) -> Self {
        Self::MissingArgument { command, what }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::missing_argument("catch", "pokemon name");
        assert_eq!(err.to_string(), "provide a pokemon name for the catch command");
    }

    #[test]
    fn test_status_message() {
        let err = PokedexError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "https://pokeapi.co/api/v2/pokemon/missingno returned 404 Not Found"
        );
    }

    #[test]
    fn test_decode_error_converts() {
        let decode = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err: PokedexError = decode.into();
        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.to_string().starts_with("Could not decode response"));
    }
}
