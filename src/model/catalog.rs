use std::fmt;

/// One of the two browsable collections served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    /// Cocktail recipes, served under `/api/tragos`.
    Recipes,
    /// Party games, served under `/api/modofiesta`.
    PartyGames,
}

impl Catalog {
    /// Path segment under `/api/`.
    pub fn path(self) -> &'static str {
        match self {
            Catalog::Recipes => "tragos",
            Catalog::PartyGames => "modofiesta",
        }
    }

    /// Key some backend versions use instead of `items` in list envelopes.
    pub fn legacy_items_key(self) -> &'static str {
        match self {
            Catalog::Recipes => "tragos",
            Catalog::PartyGames => "juegos",
        }
    }

    /// Resource name shown in list error messages.
    pub fn list_label(self) -> &'static str {
        self.legacy_items_key()
    }

    /// Resource name shown in detail error messages.
    pub fn item_label(self) -> &'static str {
        match self {
            Catalog::Recipes => "trago",
            Catalog::PartyGames => "juego",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
