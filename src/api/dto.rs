use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::PlayerView;

/// Снимок состояния игры, как его отдаёт движок.
///
/// Снимок всегда заменяется целиком: новый пришёл — старый выброшен,
/// никакого слияния или частичных обновлений.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
    pub community: Vec<Card>,
    pub pot_size: Chips,
}

impl GameSnapshot {
    /// Пустой стол — состояние до первого ответа движка.
    pub fn empty() -> Self {
        Self {
            players: Vec::new(),
            community: Vec::new(),
            pot_size: Chips::ZERO,
        }
    }
}

/// Инклюзивные границы суммы bet/raise, присылаются движком на каждый снимок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AmountRange {
    pub start: Chips,
    pub end: Chips,
}

impl AmountRange {
    pub fn new(start: Chips, end: Chips) -> Self {
        Self { start, end }
    }

    /// `start == end` — сумма фиксирована, игроку нечего выбирать:
    /// один клик по кнопке сразу коммитит `start`.
    pub fn is_fixed(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, value: Chips) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Легальное действие, объявленное движком.
///
/// На проводе это гетерогенный список: строки (`"Call"`, `"Check"`, `"Fold"`)
/// вперемешку с объектами с суммой (`{"Bet": 100}`, `{"Raise": 100}`).
/// Разбирается один раз на границе (см. `decode_descriptors`), дальше по коду
/// ходит только этот enum. Сумма в `Bet`/`Raise` информационная — реальную
/// сумму игрок выбирает в диапазоне `AmountRange`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionDescriptor {
    Call,
    Check,
    Fold,
    Bet(Chips),
    Raise(Chips),
}
