use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Финальное решение игрока, отправляемое движку.
///
/// Единственный артефакт, который ядро производит на одно решение.
/// После эмиссии для нас оно непрозрачно: валидация и переход состояния —
/// забота движка.
///
/// Сериализация совпадает с проводным форматом: `Call` → `"Call"`,
/// `Bet(Chips(200))` → `{"Bet": 200}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionIntent {
    Call,
    Check,
    Fold,
    Bet(Chips),
    Raise(Chips),
}
