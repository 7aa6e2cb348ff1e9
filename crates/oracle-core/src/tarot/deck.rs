//! The 78-card tarot deck.
//!
//! Card index `i` in a [`CardSelection`](super::CardSelection) is `CARDS[i]`:
//! 22 major arcana, then Cups, Swords, Wands and Pentacles from Ace to King.

use serde::Serialize;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 78;

/// Major or minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Minor => write!(f, "Minor Arcana"),
        }
    }
}

/// Minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cups,
    Swords,
    Wands,
    Pentacles,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cups => write!(f, "cups"),
            Self::Swords => write!(f, "swords"),
            Self::Wands => write!(f, "wands"),
            Self::Pentacles => write!(f, "pentacles"),
        }
    }
}

/// Static metadata for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Position in [`CARDS`], `0..78`.
    pub id: u8,
    pub name: &'static str,
    /// Printed rank: "0".."21" for the majors, "1".."14" within a suit.
    pub number: &'static str,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    /// Image file name, e.g. `"m00.jpg"`.
    pub image: &'static str,
}

impl Card {
    /// Name with a `(Reversed)` suffix when `reversed`.
    pub fn display_name(&self, reversed: bool) -> String {
        if reversed {
            format!("{} (Reversed)", self.name)
        } else {
            self.name.to_string()
        }
    }
}

const fn card(
    id: u8,
    name: &'static str,
    number: &'static str,
    arcana: Arcana,
    suit: Option<Suit>,
    image: &'static str,
) -> Card {
    Card {
        id,
        name,
        number,
        arcana,
        suit,
        image,
    }
}

pub static CARDS: [Card; DECK_SIZE] = [
    card(0, "The Fool", "0", Arcana::Major, None, "m00.jpg"),
    card(1, "The Magician", "1", Arcana::Major, None, "m01.jpg"),
    card(2, "The High Priestess", "2", Arcana::Major, None, "m02.jpg"),
    card(3, "The Empress", "3", Arcana::Major, None, "m03.jpg"),
    card(4, "The Emperor", "4", Arcana::Major, None, "m04.jpg"),
    card(5, "The Hierophant", "5", Arcana::Major, None, "m05.jpg"),
    card(6, "The Lovers", "6", Arcana::Major, None, "m06.jpg"),
    card(7, "The Chariot", "7", Arcana::Major, None, "m07.jpg"),
    card(8, "Strength", "8", Arcana::Major, None, "m08.jpg"),
    card(9, "The Hermit", "9", Arcana::Major, None, "m09.jpg"),
    card(10, "Wheel of Fortune", "10", Arcana::Major, None, "m10.jpg"),
    card(11, "Justice", "11", Arcana::Major, None, "m11.jpg"),
    card(12, "The Hanged Man", "12", Arcana::Major, None, "m12.jpg"),
    card(13, "Death", "13", Arcana::Major, None, "m13.jpg"),
    card(14, "Temperance", "14", Arcana::Major, None, "m14.jpg"),
    card(15, "The Devil", "15", Arcana::Major, None, "m15.jpg"),
    card(16, "The Tower", "16", Arcana::Major, None, "m16.jpg"),
    card(17, "The Star", "17", Arcana::Major, None, "m17.jpg"),
    card(18, "The Moon", "18", Arcana::Major, None, "m18.jpg"),
    card(19, "The Sun", "19", Arcana::Major, None, "m19.jpg"),
    card(20, "Judgement", "20", Arcana::Major, None, "m20.jpg"),
    card(21, "The World", "21", Arcana::Major, None, "m21.jpg"),
    card(22, "Ace of Cups", "1", Arcana::Minor, Some(Suit::Cups), "c01.jpg"),
    card(23, "Two of Cups", "2", Arcana::Minor, Some(Suit::Cups), "c02.jpg"),
    card(24, "Three of Cups", "3", Arcana::Minor, Some(Suit::Cups), "c03.jpg"),
    card(25, "Four of Cups", "4", Arcana::Minor, Some(Suit::Cups), "c04.jpg"),
    card(26, "Five of Cups", "5", Arcana::Minor, Some(Suit::Cups), "c05.jpg"),
    card(27, "Six of Cups", "6", Arcana::Minor, Some(Suit::Cups), "c06.jpg"),
    card(28, "Seven of Cups", "7", Arcana::Minor, Some(Suit::Cups), "c07.jpg"),
    card(29, "Eight of Cups", "8", Arcana::Minor, Some(Suit::Cups), "c08.jpg"),
    card(30, "Nine of Cups", "9", Arcana::Minor, Some(Suit::Cups), "c09.jpg"),
    card(31, "Ten of Cups", "10", Arcana::Minor, Some(Suit::Cups), "c10.jpg"),
    card(32, "Page of Cups", "11", Arcana::Minor, Some(Suit::Cups), "c11.jpg"),
    card(33, "Knight of Cups", "12", Arcana::Minor, Some(Suit::Cups), "c12.jpg"),
    card(34, "Queen of Cups", "13", Arcana::Minor, Some(Suit::Cups), "c13.jpg"),
    card(35, "King of Cups", "14", Arcana::Minor, Some(Suit::Cups), "c14.jpg"),
    card(36, "Ace of Swords", "1", Arcana::Minor, Some(Suit::Swords), "s01.jpg"),
    card(37, "Two of Swords", "2", Arcana::Minor, Some(Suit::Swords), "s02.jpg"),
    card(38, "Three of Swords", "3", Arcana::Minor, Some(Suit::Swords), "s03.jpg"),
    card(39, "Four of Swords", "4", Arcana::Minor, Some(Suit::Swords), "s04.jpg"),
    card(40, "Five of Swords", "5", Arcana::Minor, Some(Suit::Swords), "s05.jpg"),
    card(41, "Six of Swords", "6", Arcana::Minor, Some(Suit::Swords), "s06.jpg"),
    card(42, "Seven of Swords", "7", Arcana::Minor, Some(Suit::Swords), "s07.jpg"),
    card(43, "Eight of Swords", "8", Arcana::Minor, Some(Suit::Swords), "s08.jpg"),
    card(44, "Nine of Swords", "9", Arcana::Minor, Some(Suit::Swords), "s09.jpg"),
    card(45, "Ten of Swords", "10", Arcana::Minor, Some(Suit::Swords), "s10.jpg"),
    card(46, "Page of Swords", "11", Arcana::Minor, Some(Suit::Swords), "s11.jpg"),
    card(47, "Knight of Swords", "12", Arcana::Minor, Some(Suit::Swords), "s12.jpg"),
    card(48, "Queen of Swords", "13", Arcana::Minor, Some(Suit::Swords), "s13.jpg"),
    card(49, "King of Swords", "14", Arcana::Minor, Some(Suit::Swords), "s14.jpg"),
    card(50, "Ace of Wands", "1", Arcana::Minor, Some(Suit::Wands), "w01.jpg"),
    card(51, "Two of Wands", "2", Arcana::Minor, Some(Suit::Wands), "w02.jpg"),
    card(52, "Three of Wands", "3", Arcana::Minor, Some(Suit::Wands), "w03.jpg"),
    card(53, "Four of Wands", "4", Arcana::Minor, Some(Suit::Wands), "w04.jpg"),
    card(54, "Five of Wands", "5", Arcana::Minor, Some(Suit::Wands), "w05.jpg"),
    card(55, "Six of Wands", "6", Arcana::Minor, Some(Suit::Wands), "w06.jpg"),
    card(56, "Seven of Wands", "7", Arcana::Minor, Some(Suit::Wands), "w07.jpg"),
    card(57, "Eight of Wands", "8", Arcana::Minor, Some(Suit::Wands), "w08.jpg"),
    card(58, "Nine of Wands", "9", Arcana::Minor, Some(Suit::Wands), "w09.jpg"),
    card(59, "Ten of Wands", "10", Arcana::Minor, Some(Suit::Wands), "w10.jpg"),
    card(60, "Page of Wands", "11", Arcana::Minor, Some(Suit::Wands), "w11.jpg"),
    card(61, "Knight of Wands", "12", Arcana::Minor, Some(Suit::Wands), "w12.jpg"),
    card(62, "Queen of Wands", "13", Arcana::Minor, Some(Suit::Wands), "w13.jpg"),
    card(63, "King of Wands", "14", Arcana::Minor, Some(Suit::Wands), "w14.jpg"),
    card(64, "Ace of Pentacles", "1", Arcana::Minor, Some(Suit::Pentacles), "p01.jpg"),
    card(65, "Two of Pentacles", "2", Arcana::Minor, Some(Suit::Pentacles), "p02.jpg"),
    card(66, "Three of Pentacles", "3", Arcana::Minor, Some(Suit::Pentacles), "p03.jpg"),
    card(67, "Four of Pentacles", "4", Arcana::Minor, Some(Suit::Pentacles), "p04.jpg"),
    card(68, "Five of Pentacles", "5", Arcana::Minor, Some(Suit::Pentacles), "p05.jpg"),
    card(69, "Six of Pentacles", "6", Arcana::Minor, Some(Suit::Pentacles), "p06.jpg"),
    card(70, "Seven of Pentacles", "7", Arcana::Minor, Some(Suit::Pentacles), "p07.jpg"),
    card(71, "Eight of Pentacles", "8", Arcana::Minor, Some(Suit::Pentacles), "p08.jpg"),
    card(72, "Nine of Pentacles", "9", Arcana::Minor, Some(Suit::Pentacles), "p09.jpg"),
    card(73, "Ten of Pentacles", "10", Arcana::Minor, Some(Suit::Pentacles), "p10.jpg"),
    card(74, "Page of Pentacles", "11", Arcana::Minor, Some(Suit::Pentacles), "p11.jpg"),
    card(75, "Knight of Pentacles", "12", Arcana::Minor, Some(Suit::Pentacles), "p12.jpg"),
    card(76, "Queen of Pentacles", "13", Arcana::Minor, Some(Suit::Pentacles), "p13.jpg"),
    card(77, "King of Pentacles", "14", Arcana::Minor, Some(Suit::Pentacles), "p14.jpg"),
];

/// Look up a card by deck index.
pub fn card_by_id(id: usize) -> Option<&'static Card> {
    CARDS.get(id)
}
