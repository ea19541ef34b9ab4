//! Контроллер действий игрока — единственная часть крейта с настоящим
//! состоянием и переходами.
//!
//! Состав:
//! - legality.rs — декодер объявленных движком легальных действий;
//! - amount.rs — конечный автомат ввода суммы bet/raise;
//! - intent.rs — исходящее решение игрока;
//! - сам контроллер (ниже) — держит входы снимка и режим ввода,
//!   по render() отдаёт описание панели, на решение эмитит ровно один intent.

pub mod amount;
pub mod intent;
pub mod legality;

pub use amount::{AmountInput, AmountMode};
pub use intent::ActionIntent;
pub use legality::Legality;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::dto::AmountRange;
use crate::domain::chips::Chips;

/// Ошибки контроллера.
///
/// Это дефекты привязки UI, а не ситуации времени выполнения: render()
/// отключает соответствующие кнопки, так что через нормальный интерфейс
/// эти пути недостижимы. Восстанавливаться тут не от чего.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("действие сейчас нелегально")]
    ActionNotLegal,

    #[error("нет активного ввода суммы")]
    NotEnteringAmount,

    #[error("ввод суммы уже открыт: сначала commit или cancel")]
    AlreadyEnteringAmount,
}

/// Описание одной кнопки панели действий.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

impl ButtonView {
    fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }
}

/// Что рисовать на месте панели действий.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionPanel {
    /// Обычная панель: четыре кнопки. Fold присутствует всегда,
    /// но активен только когда легален.
    Buttons {
        call: ButtonView,
        bet_or_raise: ButtonView,
        check: ButtonView,
        fold: ButtonView,
    },
    /// Ввод суммы: слайдер в границах `range` плюс кнопки подтверждения/отмены.
    AmountEntry {
        label: String,
        value: Chips,
        range: AmountRange,
    },
}

/// Внутренняя метка: по какой кнопке открывается ввод.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wager {
    Bet,
    Raise,
}

/// Контроллер действий игрока.
///
/// Держит входы текущего снимка (легальность, диапазон, стоимость call)
/// и режим ввода суммы. Режимом владеет монопольно: никто другой его
/// не читает и не пишет. На одно решение игрока эмитится не более одного
/// `ActionIntent`, после чего режим сразу сбрасывается в Idle — ещё до того,
/// как движок ответит новым снимком.
#[derive(Clone, Debug)]
pub struct ActionController {
    legality: Legality,
    range: Option<AmountRange>,
    call_amount: Chips,
    input: AmountInput,
}

impl ActionController {
    /// Свежий контроллер: всё запрещено, режим Idle.
    pub fn new() -> Self {
        Self {
            legality: Legality::NONE,
            range: None,
            call_amount: Chips::ZERO,
            input: AmountInput::new(),
        }
    }

    pub fn mode(&self) -> AmountMode {
        self.input.mode()
    }

    pub fn legality(&self) -> Legality {
        self.legality
    }

    pub fn range(&self) -> Option<AmountRange> {
        self.range
    }

    pub fn call_amount(&self) -> Chips {
        self.call_amount
    }

    /// Текущее значение ввода суммы (имеет смысл только в Entering*).
    pub fn amount(&self) -> Chips {
        self.input.value()
    }

    /// Новый снимок: входы заменяются целиком.
    ///
    /// Если диапазон изменился, открытый ввод суммы сбрасывается в Idle —
    /// старое значение не имеет смысла против новых границ. При том же
    /// диапазоне открытый ввод переживает снимок.
    pub fn apply_snapshot(
        &mut self,
        legality: Legality,
        range: Option<AmountRange>,
        call_amount: Chips,
    ) {
        if self.range != range {
            self.input.cancel();
        }
        self.legality = legality;
        self.range = range;
        self.call_amount = call_amount;
    }

    /// Чистое описание панели из текущего режима + входов снимка.
    pub fn render(&self) -> ActionPanel {
        match self.input.mode() {
            AmountMode::EnteringBet => ActionPanel::AmountEntry {
                label: "Bet".to_string(),
                value: self.input.value(),
                range: self.input.range(),
            },
            AmountMode::EnteringRaise => ActionPanel::AmountEntry {
                label: "Raise".to_string(),
                value: self.input.value(),
                range: self.input.range(),
            },
            AmountMode::Idle => self.render_buttons(),
        }
    }

    fn render_buttons(&self) -> ActionPanel {
        // Суффикс у Call — чисто информационный, сам intent суммы не несёт.
        let call_label = if self.call_amount.is_zero() {
            "Call".to_string()
        } else {
            format!("Call {}", self.call_amount)
        };

        // Кнопка одна на bet и raise: подпись по тому, что легально
        // (bet и raise взаимоисключающие). При фиксированном диапазоне
        // сумма выносится прямо в подпись.
        let wager_name = if self.legality.bet { "Bet" } else { "Raise" };
        let wager_enabled = self.legality.can_wager();
        let wager_label = match self.range {
            Some(range) if wager_enabled && range.is_fixed() => {
                format!("{wager_name} {}", range.start)
            }
            _ => wager_name.to_string(),
        };

        ActionPanel::Buttons {
            call: ButtonView::new(call_label, self.legality.call),
            bet_or_raise: ButtonView::new(wager_label, wager_enabled),
            check: ButtonView::new("Check", self.legality.check),
            fold: ButtonView::new("Fold", self.legality.fold),
        }
    }

    /// Нажатие кнопки Bet.
    ///
    /// При фиксированном диапазоне intent эмитится сразу, без промежуточного
    /// состояния; иначе открывается ввод суммы и возвращается `Ok(None)`.
    pub fn choose_bet(&mut self) -> Result<Option<ActionIntent>, ControllerError> {
        self.choose_wager(Wager::Bet)
    }

    /// Нажатие кнопки Raise. Семантика как у `choose_bet`.
    pub fn choose_raise(&mut self) -> Result<Option<ActionIntent>, ControllerError> {
        self.choose_wager(Wager::Raise)
    }

    fn choose_wager(&mut self, wager: Wager) -> Result<Option<ActionIntent>, ControllerError> {
        if self.input.mode() != AmountMode::Idle {
            return Err(ControllerError::AlreadyEnteringAmount);
        }
        let legal = match wager {
            Wager::Bet => self.legality.bet,
            Wager::Raise => self.legality.raise,
        };
        let range = match self.range {
            Some(range) if legal => range,
            _ => return Err(ControllerError::ActionNotLegal),
        };

        if range.is_fixed() {
            // Выбора нет — один клик коммитит start. Форма intent'а
            // та же, что и на обычном пути.
            let intent = match wager {
                Wager::Bet => ActionIntent::Bet(range.start),
                Wager::Raise => ActionIntent::Raise(range.start),
            };
            return Ok(Some(intent));
        }

        match wager {
            Wager::Bet => self.input.begin_bet(range),
            Wager::Raise => self.input.begin_raise(range),
        }
        Ok(None)
    }

    /// Обновление значения от контрола ввода (контрол ограничен диапазоном).
    pub fn set_amount(&mut self, value: Chips) -> Result<(), ControllerError> {
        if self.input.mode() == AmountMode::Idle {
            return Err(ControllerError::NotEnteringAmount);
        }
        self.input.set_value(value);
        Ok(())
    }

    /// Подтверждение введённой суммы: ровно один intent, режим сразу Idle.
    pub fn commit_amount(&mut self, value: Chips) -> Result<ActionIntent, ControllerError> {
        if self.input.mode() == AmountMode::Idle {
            return Err(ControllerError::NotEnteringAmount);
        }
        self.input.set_value(value);
        self.input.commit().ok_or(ControllerError::NotEnteringAmount)
    }

    /// Отмена ввода суммы без эмиссии. Из Idle — no-op.
    pub fn cancel_amount(&mut self) {
        self.input.cancel();
    }

    /// Сигнал прерывания (ESC): всегда приводит в Idle, ничего не эмитит.
    pub fn abort(&mut self) {
        self.input.abort();
    }

    /// Call: легален — эмитим сразу, режим в Idle (если уже Idle — без эффекта).
    pub fn call(&mut self) -> Result<ActionIntent, ControllerError> {
        if !self.legality.call {
            return Err(ControllerError::ActionNotLegal);
        }
        self.input.cancel();
        Ok(ActionIntent::Call)
    }

    /// Check: семантика как у `call`.
    pub fn check(&mut self) -> Result<ActionIntent, ControllerError> {
        if !self.legality.check {
            return Err(ControllerError::ActionNotLegal);
        }
        self.input.cancel();
        Ok(ActionIntent::Check)
    }

    /// Fold: кнопка видна всегда, но активна только когда легальна.
    pub fn fold(&mut self) -> Result<ActionIntent, ControllerError> {
        if !self.legality.fold {
            return Err(ControllerError::ActionNotLegal);
        }
        self.input.cancel();
        Ok(ActionIntent::Fold)
    }
}

impl Default for ActionController {
    fn default() -> Self {
        Self::new()
    }
}
