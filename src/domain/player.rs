use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Игрок, как его видит стол: имя, карманные карты, текущая ставка и стек.
///
/// `None` на месте карты — карта скрыта (соперник или карты ещё не розданы),
/// отрисовывается рубашкой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub hole: [Option<Card>; 2],
    pub bet_size: Chips,
    pub stack: Chips,
}

impl PlayerView {
    pub fn new(name: impl Into<String>, hole: [Option<Card>; 2], bet_size: Chips, stack: Chips) -> Self {
        Self {
            name: name.into(),
            hole,
            bet_size,
            stack,
        }
    }

    /// Игрок с закрытыми картами (как видим соперников).
    pub fn hidden(name: impl Into<String>, bet_size: Chips, stack: Chips) -> Self {
        Self::new(name, [None, None], bet_size, stack)
    }
}
