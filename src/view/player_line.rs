use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerView;
use crate::view::card_view::CardView;

/// Строка игрока на столе: имя, ставка, стек и две карманные карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerLine {
    pub name: String,
    pub bet_size: Chips,
    pub stack: Chips,
    pub hole: [CardView; 2],
}

impl PlayerLine {
    pub fn from_view(player: &PlayerView) -> Self {
        Self {
            name: player.name.clone(),
            bet_size: player.bet_size,
            stack: player.stack,
            hole: [CardView::hole(player.hole[0]), CardView::hole(player.hole[1])],
        }
    }
}
