use std::str::FromStr;

/// One parsed line of player input.
///
/// `word` is `None` when the first token was not in the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub word: Option<String>,
    pub second_word: Option<String>,
}

impl Action {
    pub fn new(word: Option<&str>, second_word: Option<&str>) -> Self {
        Action {
            word: word.map(str::to_string),
            second_word: second_word.map(str::to_string),
        }
    }

    /// Convenience for a known verb with an optional argument.
    pub fn verb(word: &str, second_word: Option<&str>) -> Self {
        Self::new(Some(word), second_word)
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Action words the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Quit,
    Help,
    Drop,
    Lock,
    Map,
    PickUp,
    Search,
    Unlock,
}

impl Verb {
    /// Vocabulary in the order the help text lists it.
    pub const ALL: [Verb; 9] = [
        Verb::Go,
        Verb::Quit,
        Verb::Help,
        Verb::Drop,
        Verb::Lock,
        Verb::Map,
        Verb::PickUp,
        Verb::Search,
        Verb::Unlock,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Quit => "quit",
            Verb::Help => "help",
            Verb::Drop => "drop",
            Verb::Lock => "lock",
            Verb::Map => "map",
            Verb::PickUp => "pick-up",
            Verb::Search => "search",
            Verb::Unlock => "unlock",
        }
    }

    /// `map` and `help` only read the world and never cost a turn.
    pub fn is_meta(self) -> bool {
        matches!(self, Verb::Map | Verb::Help)
    }
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or(())
    }
}
