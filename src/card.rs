//! Card types and deck constants.

use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Card suit, in the canonical deck-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the canonical lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
        }
    }

    /// Returns the capitalized name of the suit, for display.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the color of the suit: black for spades and clubs, red for
    /// diamonds and hearts.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Parses a suit from its canonical lowercase name.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the name is not one of
    /// `"diamonds"`, `"hearts"`, `"spades"`, or `"clubs"`.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        match name {
            "diamonds" => Ok(Self::Diamonds),
            "hearts" => Ok(Self::Hearts),
            "spades" => Ok(Self::Spades),
            "clubs" => Ok(Self::Clubs),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Card rank, ace low, in the canonical deck-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the canonical lowercase name of the rank.
    ///
    /// Number cards use their digits (`"2"` through `"10"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Returns the capitalized name of the rank, for display.
    ///
    /// Number cards are unchanged; the ace and face cards are capitalized.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            _ => self.name(),
        }
    }

    /// Parses a rank from its canonical lowercase name.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the name is not `"ace"`, a
    /// digit string `"2"` through `"10"`, `"jack"`, `"queen"`, or `"king"`.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        match name {
            "ace" => Ok(Self::Ace),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "jack" => Ok(Self::Jack),
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            _ => Err(CardError::InvalidRank),
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Diamonds and hearts.
    Red,
}

/// Where a card currently sits on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Number of the owning pile (`None` for the stock and waste, which
    /// are singletons).
    pub pile: Option<u8>,
    /// Index within the pile, counting from the bottom.
    pub index: usize,
}

/// A playing card.
///
/// Suit and rank are fixed at construction; `face_up` and the table
/// position change as the card moves through a game. Only the owning
/// [`Pile`](crate::Pile) assigns positions, via
/// [`Pile::update_card_positions`](crate::Pile::update_card_positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether the card is face up.
    pub face_up: bool,
    position: Option<Position>,
}

impl Card {
    /// Creates a new card, face down, with no table position.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::{Card, Color, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spades, Rank::King);
    /// assert_eq!(card.color(), Color::Black);
    /// assert!(!card.face_up);
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
            position: None,
        }
    }

    /// Creates a card from canonical lowercase suit and rank names.
    ///
    /// This is the validating boundary for string input (fixtures, future
    /// save files); malformed names are rejected rather than stored.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] or [`CardError::InvalidRank`] if
    /// either name is outside its enumeration.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::{Card, CardError};
    ///
    /// let card = Card::from_names("clubs", "10").unwrap();
    /// assert_eq!(card.image_filename(), "10_of_clubs.png");
    /// assert_eq!(Card::from_names("joker", "ace"), Err(CardError::InvalidSuit));
    /// ```
    pub fn from_names(suit: &str, rank: &str) -> Result<Self, CardError> {
        let suit = Suit::from_name(suit)?;
        let rank = Rank::from_name(rank)?;
        Ok(Self::new(suit, rank))
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the card's current table position, if it has been dealt
    /// into a pile.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Sets the table position. Only piles stamp positions.
    pub(crate) const fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Returns the file name of the face image for this card, in the
    /// `"{rank}_of_{suit}.png"` convention renderers use as an image
    /// cache key.
    #[must_use]
    pub fn image_filename(&self) -> String {
        let mut name = String::with_capacity(self.rank.name().len() + self.suit.name().len() + 8);
        name.push_str(self.rank.name());
        name.push_str("_of_");
        name.push_str(self.suit.name());
        name.push_str(".png");
        name
    }

    /// Returns the human-readable name of the card, e.g. `"Ace of Spades"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        use alloc::string::ToString;
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.title(), self.suit.title())
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
