use serde::{Deserialize, Serialize};

use crate::api::dto::AmountRange;
use crate::controller::intent::ActionIntent;
use crate::domain::chips::Chips;

/// Режим ввода суммы. `Idle` — обычная панель кнопок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountMode {
    #[default]
    Idle,
    EnteringBet,
    EnteringRaise,
}

/// Конечный автомат ввода суммы bet/raise.
///
/// Переходы:
///   Idle → EnteringBet | EnteringRaise   (begin_bet / begin_raise)
///   EnteringBet | EnteringRaise → Idle   (commit / cancel / abort)
///
/// Прямого перехода между EnteringBet и EnteringRaise нет: сначала
/// commit или cancel, потом новый вход (контроллер это гарантирует).
/// Диапазон хранится внутри с момента входа, значение стартует с `range.start`.
#[derive(Clone, Copy, Debug)]
pub struct AmountInput {
    mode: AmountMode,
    range: AmountRange,
    value: Chips,
}

impl AmountInput {
    pub fn new() -> Self {
        Self {
            mode: AmountMode::Idle,
            range: AmountRange::new(Chips::ZERO, Chips::ZERO),
            value: Chips::ZERO,
        }
    }

    pub fn mode(&self) -> AmountMode {
        self.mode
    }

    /// Текущее выбранное значение. Имеет смысл только в Entering*.
    pub fn value(&self) -> Chips {
        self.value
    }

    /// Диапазон, с которым открыт ввод.
    pub fn range(&self) -> AmountRange {
        self.range
    }

    /// Вход в режим ввода bet. Значение стартует с нижней границы.
    pub fn begin_bet(&mut self, range: AmountRange) {
        self.mode = AmountMode::EnteringBet;
        self.range = range;
        self.value = range.start;
    }

    /// Вход в режим ввода raise. Значение стартует с нижней границы.
    pub fn begin_raise(&mut self, range: AmountRange) {
        self.mode = AmountMode::EnteringRaise;
        self.range = range;
        self.value = range.start;
    }

    /// Обновление значения от слайдера/поля ввода.
    ///
    /// Контрол сам ограничен диапазоном (min/max слайдера), поэтому здесь
    /// повторно не клэмпим: значение вне границ — дефект поверхности ввода.
    /// В Idle вызов игнорируется.
    pub fn set_value(&mut self, value: Chips) {
        if self.mode != AmountMode::Idle {
            self.value = value;
        }
    }

    /// Движок прислал новый диапазон посреди ввода (в норме не случается,
    /// ввод — локальная пауза между снимками): откатываем значение на начало
    /// нового диапазона.
    pub fn sync_range(&mut self, range: AmountRange) {
        if self.mode != AmountMode::Idle {
            self.range = range;
            self.value = range.start;
        }
    }

    /// Подтверждение: ровно один intent, затем Idle.
    ///
    /// Из `EnteringBet` всегда уходит `Bet`, из `EnteringRaise` — `Raise`.
    /// Из Idle ничего не эмитится.
    pub fn commit(&mut self) -> Option<ActionIntent> {
        let intent = match self.mode {
            AmountMode::Idle => None,
            AmountMode::EnteringBet => Some(ActionIntent::Bet(self.value)),
            AmountMode::EnteringRaise => Some(ActionIntent::Raise(self.value)),
        };
        self.reset();
        intent
    }

    /// Отмена без эмиссии. Из Idle — no-op.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Внешний сигнал прерывания (эквивалент ESC): немедленно в Idle
    /// из любого состояния, накопленное значение отбрасывается.
    pub fn abort(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = AmountMode::Idle;
        self.range = AmountRange::new(Chips::ZERO, Chips::ZERO);
        self.value = Chips::ZERO;
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::new()
    }
}
