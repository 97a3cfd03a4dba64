//! REPL Module
//!
//! The interactive Pokedex prompt. Reads one line at a time, dispatches it to
//! a [`Session`], and prints command errors without ending the loop.

mod commands;
mod pokedex;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub use commands::Command;
pub use pokedex::Pokedex;
pub use session::{Flow, Session};

/// Prompt printed before every line.
pub const PROMPT: &str = "Pokedex > ";

/// Splits a raw input line into lowercased words, dropping extra whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the prompt until `exit`, end of input, or `cancel` fires.
pub async fn run<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    cancel: &CancellationToken,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = tokio::select! {
            _ = cancel.cancelled() => {
                info!("REPL cancelled");
                writeln!(out)?;
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            writeln!(out)?;
            break;
        };

        match session.execute(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(error = %err, "Command failed");
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::api::PokeApiClient;
    use crate::cache::Cache;

    fn offline_session() -> Session {
        let cache = Cache::new(Duration::from_secs(60));
        let client =
            PokeApiClient::new("http://127.0.0.1:9/", cache, Duration::from_secs(1)).unwrap();
        Session::with_rng(client, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_clean_input_single_spaces() {
        assert_eq!(clean_input("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_clean_input_extra_whitespace() {
        assert_eq!(clean_input("  hello   world   "), vec!["hello", "world"]);
        assert_eq!(clean_input("\tcatch\t pikachu\n"), vec!["catch", "pikachu"]);
    }

    #[test]
    fn test_clean_input_lowercases() {
        assert_eq!(
            clean_input("Charmander Bulbasaur PIKACHU"),
            vec!["charmander", "bulbasaur", "pikachu"]
        );
    }

    #[test]
    fn test_clean_input_empty() {
        assert!(clean_input("").is_empty());
        assert!(clean_input("    ").is_empty());
    }

    #[tokio::test]
    async fn test_run_until_exit() {
        let mut session = offline_session();
        let input: &[u8] = b"nope\nexit\nhelp\n";
        let mut out = Vec::new();

        run(&mut session, input, &mut out, &CancellationToken::new())
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Pokedex > Unknown command\nPokedex > Closing the Pokedex... Goodbye!\n"
        );
    }

    #[tokio::test]
    async fn test_run_reports_errors_and_continues() {
        let mut session = offline_session();
        let stdin = tokio_test::io::Builder::new()
            .read(b"catch\n")
            .read(b"pokedex\n")
            .build();
        let mut out = Vec::new();

        run(
            &mut session,
            tokio::io::BufReader::new(stdin),
            &mut out,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Pokedex > Error: provide a pokemon name for the catch command\n\
             Pokedex > Your Pokedex:\n\
             Pokedex > \n"
        );
    }

    #[tokio::test]
    async fn test_run_stops_when_cancelled() {
        let mut session = offline_session();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let (reader, _writer) = tokio::io::duplex(64);
        let mut out = Vec::new();

        run(&mut session, tokio::io::BufReader::new(reader), &mut out, &cancel)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Pokedex > \n");
    }
}
