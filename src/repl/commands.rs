//! REPL command registry

/// A command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Looks a command up by its (already lowercased) name.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == word)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of the next 20 location areas",
            Command::Mapb => "Displays the names of the previous 20 location areas",
            Command::Explore => "Lists the Pokemon found in a location area",
            Command::Catch => "Throws a Pokeball at a Pokemon",
            Command::Inspect => "Shows the details of a caught Pokemon",
            Command::Pokedex => "Lists every Pokemon you have caught",
        }
    }
}
