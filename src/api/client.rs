use serde_json::Value;

use crate::api::dto::{AmountRange, GameSnapshot};
use crate::api::errors::ApiError;
use crate::controller::intent::ActionIntent;
use crate::domain::chips::Chips;

/// Граница с внешним игровым движком (request → response).
///
/// Движок — чёрный ящик: он сам считает легальность, банк и очередность.
/// UI видит ровно пять вызовов. Реализация трейта живёт в хост-приложении
/// (IPC, сеть — что угодно); в тестах достаточно ручного мока.
pub trait EngineClient {
    /// Начать новую раздачу.
    fn new_round(&mut self) -> Result<GameSnapshot, ApiError>;

    /// Легальные действия для снимка — сырые JSON-значения,
    /// разбор делает `decode_descriptors` на нашей стороне.
    fn possible_actions(&mut self, game: &GameSnapshot) -> Result<Vec<Value>, ApiError>;

    /// Сколько фишек стоит call (0, если звать нечего).
    fn call_amount(&mut self, game: &GameSnapshot) -> Result<Chips, ApiError>;

    /// Диапазон суммы для bet/raise; `None`, если ставка сейчас невозможна.
    fn raise_or_bet_range(&mut self, game: &GameSnapshot) -> Result<Option<AmountRange>, ApiError>;

    /// Отправить решение игрока, получить обновлённый снимок.
    fn act(&mut self, game: &GameSnapshot, intent: ActionIntent) -> Result<GameSnapshot, ApiError>;
}
