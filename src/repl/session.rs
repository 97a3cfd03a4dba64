//! REPL session state and command handlers

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::repl::{clean_input, Command, Pokedex};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State carried between REPL lines.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next: Option<String>,
    previous: Option<String>,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    /// Starts at the first page of location areas with an entropy-seeded rng.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Same as [`Session::new`] with a caller supplied rng, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        let first_page = client.location_areas_url();
        Self {
            client,
            next: Some(first_page),
            previous: None,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Parses and runs one input line, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some(command) = words.first().and_then(|word| Command::parse(word)) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };
        let arg = words.get(1).map(String::as_str);
        debug!(command = command.name(), ?arg, "Running command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => {
                let area = arg.ok_or(PokedexError::missing_argument("explore", "location"))?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = arg.ok_or(PokedexError::missing_argument("catch", "pokemon name"))?;
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let name =
                    arg.ok_or(PokedexError::missing_argument("inspect", "pokemon name"))?;
                self.inspect(name, out)?;
            }
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.next.clone() {
            Some(url) => self.show_page(&url, out).await,
            None => {
                writeln!(out, "You're on the last page")?;
                Ok(())
            }
        }
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.previous.clone() {
            Some(url) => self.show_page(&url, out).await,
            None => {
                writeln!(out, "You're on the first page")?;
                Ok(())
            }
        }
    }

    /// Prints one page of areas and moves the cursors to its neighbours.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in &location.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;

        let roll: f64 = self.rng.gen();
        if roll > pokemon.escape_chance() {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.record(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        for pokemon in self.pokedex.iter() {
            writeln!(out, " - {}", pokemon.name)?;
        }
        Ok(())
    }
}
