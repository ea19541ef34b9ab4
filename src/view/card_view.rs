use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};

/// Цвет отрисовки карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

/// Что показывать на месте карты: лицевую сторону или рубашку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardView {
    Face {
        rank: String,
        suit: char,
        color: CardColor,
    },
    Back,
}

impl CardView {
    pub fn face(card: Card) -> Self {
        CardView::Face {
            rank: card.rank.to_string(),
            suit: suit_symbol(card.suit),
            color: suit_color(card.suit),
        }
    }

    /// Карманная карта: `None` — рубашка.
    pub fn hole(card: Option<Card>) -> Self {
        match card {
            Some(card) => Self::face(card),
            None => CardView::Back,
        }
    }
}

/// Символ масти для отрисовки.
pub fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Clubs => '♣',
        Suit::Diamonds => '♦',
        Suit::Hearts => '♥',
        Suit::Spades => '♠',
    }
}

/// Червы и бубны красные, трефы и пики чёрные.
pub fn suit_color(suit: Suit) -> CardColor {
    match suit {
        Suit::Hearts | Suit::Diamonds => CardColor::Red,
        Suit::Clubs | Suit::Spades => CardColor::Black,
    }
}
