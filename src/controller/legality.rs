use serde::{Deserialize, Serialize};

use crate::api::dto::ActionDescriptor;

/// Развёрнутая карта доступности действий: по флагу на кнопку.
///
/// Bet и raise по правилам покера взаимоисключающие, check и fold тоже
/// не живут вместе, когда возможен call, — но декодер на это не опирается:
/// он честно отражает то, что объявил движок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Legality {
    pub call: bool,
    pub check: bool,
    pub fold: bool,
    pub bet: bool,
    pub raise: bool,
}

impl Legality {
    /// Всё запрещено — состояние до первого снимка.
    pub const NONE: Legality = Legality {
        call: false,
        check: false,
        fold: false,
        bet: false,
        raise: false,
    };

    /// Чистая свёртка списка дескрипторов в флаги.
    /// Порядок не важен, дубликаты безвредны.
    pub fn decode(descriptors: &[ActionDescriptor]) -> Self {
        let mut legality = Legality::NONE;
        for descriptor in descriptors {
            match descriptor {
                ActionDescriptor::Call => legality.call = true,
                ActionDescriptor::Check => legality.check = true,
                ActionDescriptor::Fold => legality.fold = true,
                ActionDescriptor::Bet(_) => legality.bet = true,
                ActionDescriptor::Raise(_) => legality.raise = true,
            }
        }
        legality
    }

    /// Доступна ли ставочная кнопка (bet или raise).
    pub fn can_wager(&self) -> bool {
        self.bet || self.raise
    }
}
