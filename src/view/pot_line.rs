use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerView;

/// Строка банка: собранный банк и общий размер с учётом текущих ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotLine {
    pub pot: Chips,
    /// Банк + сумма ставок на столе. `None`, когда совпадает с `pot`, —
    /// тогда отдельно его не показываем.
    pub total: Option<Chips>,
}

impl PotLine {
    pub fn new(pot: Chips, players: &[PlayerView]) -> Self {
        let total = players
            .iter()
            .fold(pot, |acc, player| acc + player.bet_size);
        Self {
            pot,
            total: (total != pot).then_some(total),
        }
    }
}
