//! Слой координации снимков: связывает `EngineClient` и `ActionController`.
//!
//! Однопоточный и событийный: сессия реагирует только на дискретные события
//! интерфейса и на приход снимков. Снимки применяются в порядке прихода и
//! целиком заменяют легальность/диапазон до приёма следующего события —
//! действовать по устаревшей легальности против нового снимка нельзя.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::EngineClient;
use crate::api::decode::decode_descriptors;
use crate::api::dto::GameSnapshot;
use crate::api::errors::ApiError;
use crate::controller::{ActionController, ActionIntent, ActionPanel, ControllerError, Legality};
use crate::domain::chips::Chips;
use crate::view::{CardView, PlayerLine, PotLine};

/// Событие интерфейса, на которое реагирует сессия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Клик по Call.
    Call,
    /// Клик по Check.
    Check,
    /// Клик по Fold.
    Fold,
    /// Клик по общей кнопке Bet/Raise.
    BetOrRaise,
    /// Слайдер/поле ввода поменяли значение.
    AmountChanged(Chips),
    /// Подтверждение введённой суммы.
    CommitAmount,
    /// Отмена ввода суммы.
    CancelAmount,
    /// Сигнал прерывания (ESC): немедленно в Idle, ничего не эмитится.
    Abort,
}

/// Полное описание стола для хост-оболочки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRender {
    pub players: Vec<PlayerLine>,
    pub community: Vec<CardView>,
    pub pot: PotLine,
    pub actions: ActionPanel,
}

/// Сессия одного стола.
///
/// Владеет клиентом движка, последним снимком и контроллером действий.
/// Ошибки границы поднимаются наверх как есть: retry-политики здесь нет,
/// контроллер просто остаётся на последних известных входах.
pub struct TableSession<C: EngineClient> {
    client: C,
    game: GameSnapshot,
    controller: ActionController,
}

impl<C: EngineClient> TableSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            game: GameSnapshot::empty(),
            controller: ActionController::new(),
        }
    }

    pub fn game(&self) -> &GameSnapshot {
        &self.game
    }

    pub fn controller(&self) -> &ActionController {
        &self.controller
    }

    /// Запуск новой раздачи.
    pub fn start(&mut self) -> Result<(), ApiError> {
        let snapshot = self.client.new_round()?;
        self.refresh(snapshot)
    }

    /// Применить свежий снимок: подтянуть легальность, стоимость call и
    /// диапазон, скормить всё контроллеру. Снимок заменяет старый целиком.
    pub fn refresh(&mut self, snapshot: GameSnapshot) -> Result<(), ApiError> {
        let raw: Vec<Value> = self.client.possible_actions(&snapshot)?;
        let descriptors = decode_descriptors(&raw);
        let legality = Legality::decode(&descriptors);
        let call_amount = self.client.call_amount(&snapshot)?;
        let range = self.client.raise_or_bet_range(&snapshot)?;

        debug!(
            "снимок применён: {} дескрипторов, call={call_amount}, range={range:?}",
            descriptors.len()
        );

        self.game = snapshot;
        self.controller.apply_snapshot(legality, range, call_amount);
        Ok(())
    }

    /// Обработка одного события интерфейса.
    ///
    /// Если решение состоялось, intent уходит в движок и возвращённый снимок
    /// применяется тут же. Отказ контроллера — дефект привязки (render()
    /// такие кнопки отключает), поэтому он логируется и глотается.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), ApiError> {
        let outcome: Result<Option<ActionIntent>, ControllerError> = match event {
            UiEvent::Call => self.controller.call().map(Some),
            UiEvent::Check => self.controller.check().map(Some),
            UiEvent::Fold => self.controller.fold().map(Some),
            UiEvent::BetOrRaise => self.choose_wager(),
            UiEvent::AmountChanged(value) => self.controller.set_amount(value).map(|_| None),
            UiEvent::CommitAmount => {
                let value = self.controller.amount();
                self.controller.commit_amount(value).map(Some)
            }
            UiEvent::CancelAmount => {
                self.controller.cancel_amount();
                Ok(None)
            }
            UiEvent::Abort => {
                self.controller.abort();
                Ok(None)
            }
        };

        match outcome {
            Ok(Some(intent)) => self.submit(intent),
            Ok(None) => Ok(()),
            Err(err) => {
                warn!("контроллер отклонил событие {event:?}: {err}");
                Ok(())
            }
        }
    }

    /// Кнопка одна на две роли; какая именно — решает легальность
    /// (bet и raise взаимоисключающие).
    fn choose_wager(&mut self) -> Result<Option<ActionIntent>, ControllerError> {
        if self.controller.legality().bet {
            self.controller.choose_bet()
        } else {
            self.controller.choose_raise()
        }
    }

    /// Отправка решения в движок.
    ///
    /// Локальный режим к этому моменту уже сброшен в Idle, так что повторная
    /// отправка из того же сеанса ввода невозможна, пока не придёт новый
    /// снимок. Ошибка движка поднимается наверх, intent не дублируется.
    fn submit(&mut self, intent: ActionIntent) -> Result<(), ApiError> {
        let snapshot = self.client.act(&self.game, intent)?;
        self.refresh(snapshot)
    }

    /// Полное описание стола для отрисовки.
    pub fn render(&self) -> TableRender {
        TableRender {
            players: self.game.players.iter().map(PlayerLine::from_view).collect(),
            community: self
                .game
                .community
                .iter()
                .map(|card| CardView::face(*card))
                .collect(),
            pot: PotLine::new(self.game.pot_size, &self.game.players),
            actions: self.controller.render(),
        }
    }
}
