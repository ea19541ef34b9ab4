// tests/session_tests.rs

//! Тесты сессии стола с мок-движком:
//! - start() подтягивает легальность/стоимость call/диапазон
//! - немедленные действия уходят в движок и применяют новый снимок
//! - ставка с диапазоном: вход → ввод → commit → отправка
//! - режим сброшен в Idle до ответа движка, даже при ошибке act
//! - отклонённые контроллером события не отправляются
//! - после нового снимка старая легальность не действует

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::{json, Value};

use poker_table_ui::api::{AmountRange, ApiError, EngineClient, GameSnapshot};
use poker_table_ui::controller::{ActionIntent, AmountMode};
use poker_table_ui::domain::{Chips, PlayerView};
use poker_table_ui::session::{TableSession, UiEvent};

/// Журнал отправленных intent'ов, общий между тестом и моком.
type SubmitLog = Rc<RefCell<Vec<ActionIntent>>>;

/// Мок движка: отдаёт заранее заданные ответы. Списки действий выдаются
/// по очереди на каждый запрос (последний повторяется), чтобы изображать
/// смену легальности между снимками.
struct MockEngine {
    action_lists: VecDeque<Vec<Value>>,
    call_amount: Chips,
    range: Option<AmountRange>,
    next_snapshot: GameSnapshot,
    submitted: SubmitLog,
    fail_act: bool,
}

impl MockEngine {
    fn new(actions: Vec<Value>, call_amount: u64, range: Option<AmountRange>) -> (Self, SubmitLog) {
        let log: SubmitLog = Rc::new(RefCell::new(Vec::new()));
        let engine = Self {
            action_lists: VecDeque::from([actions]),
            call_amount: Chips(call_amount),
            range,
            next_snapshot: snapshot(500),
            submitted: Rc::clone(&log),
            fail_act: false,
        };
        (engine, log)
    }

    /// Добавить список действий для следующего снимка.
    fn queue_actions(&mut self, actions: Vec<Value>) {
        self.action_lists.push_back(actions);
    }
}

impl EngineClient for MockEngine {
    fn new_round(&mut self) -> Result<GameSnapshot, ApiError> {
        Ok(snapshot(0))
    }

    fn possible_actions(&mut self, _game: &GameSnapshot) -> Result<Vec<Value>, ApiError> {
        if self.action_lists.len() > 1 {
            Ok(self.action_lists.pop_front().unwrap_or_default())
        } else {
            Ok(self.action_lists.front().cloned().unwrap_or_default())
        }
    }

    fn call_amount(&mut self, _game: &GameSnapshot) -> Result<Chips, ApiError> {
        Ok(self.call_amount)
    }

    fn raise_or_bet_range(&mut self, _game: &GameSnapshot) -> Result<Option<AmountRange>, ApiError> {
        Ok(self.range)
    }

    fn act(&mut self, _game: &GameSnapshot, intent: ActionIntent) -> Result<GameSnapshot, ApiError> {
        if self.fail_act {
            return Err(ApiError::EngineFault("транспорт отказал".into()));
        }
        self.submitted.borrow_mut().push(intent);
        Ok(self.next_snapshot.clone())
    }
}

/// Хелпер: снимок на двух игроков с заданным банком.
fn snapshot(pot: u64) -> GameSnapshot {
    GameSnapshot {
        players: vec![
            PlayerView::hidden("hero", Chips::ZERO, Chips(10_000)),
            PlayerView::hidden("villain", Chips::ZERO, Chips(10_000)),
        ],
        community: Vec::new(),
        pot_size: Chips(pot),
    }
}

fn range(start: u64, end: u64) -> AmountRange {
    AmountRange::new(Chips(start), Chips(end))
}

/// start() применяет первый снимок и раздаёт входы контроллеру.
#[test]
fn start_applies_first_snapshot() {
    let (engine, _log) = MockEngine::new(vec![json!("Call"), json!("Fold")], 50, None);
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    let legality = session.controller().legality();
    assert!(legality.call);
    assert!(legality.fold);
    assert!(!legality.check);
    assert_eq!(session.controller().call_amount(), Chips(50));
}

/// Клик Call: intent уходит в движок, возвращённый снимок применяется.
#[test]
fn call_event_submits_intent_and_refreshes() {
    let (engine, log) = MockEngine::new(vec![json!("Call")], 50, None);
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::Call).expect("handle failed");

    assert_eq!(*log.borrow(), vec![ActionIntent::Call]);
    // Новый снимок (pot=500 из мока) заменил старый.
    assert_eq!(session.game().pot_size, Chips(500));
}

/// Полный путь ставки: вход → слайдер → commit → отправка Bet(v).
#[test]
fn ranged_bet_full_path() {
    let (engine, log) = MockEngine::new(vec![json!({"Bet": 0})], 0, Some(range(10, 500)));
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    // Вход в режим ввода: ничего не отправлено.
    session.handle(UiEvent::BetOrRaise).expect("handle failed");
    assert_eq!(session.controller().mode(), AmountMode::EnteringBet);
    assert_eq!(session.controller().amount(), Chips(10));
    assert!(log.borrow().is_empty());

    session
        .handle(UiEvent::AmountChanged(Chips(200)))
        .expect("handle failed");
    session.handle(UiEvent::CommitAmount).expect("handle failed");

    assert_eq!(*log.borrow(), vec![ActionIntent::Bet(Chips(200))]);
    assert_eq!(session.controller().mode(), AmountMode::Idle);
}

/// Фиксированный диапазон: один клик по кнопке сразу отправляет Raise(start).
#[test]
fn fixed_range_raise_submits_on_click() {
    let (engine, log) = MockEngine::new(vec![json!({"Raise": 0})], 0, Some(range(300, 300)));
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::BetOrRaise).expect("handle failed");

    assert_eq!(*log.borrow(), vec![ActionIntent::Raise(Chips(300))]);
    assert_eq!(session.controller().mode(), AmountMode::Idle);
}

/// Отмена ввода ничего не отправляет.
#[test]
fn cancel_sends_nothing() {
    let (engine, log) = MockEngine::new(vec![json!({"Bet": 0})], 0, Some(range(10, 500)));
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::BetOrRaise).expect("handle failed");
    session.handle(UiEvent::CancelAmount).expect("handle failed");

    assert_eq!(session.controller().mode(), AmountMode::Idle);
    assert!(log.borrow().is_empty());
}

/// Сигнал прерывания синхронно закрывает ввод, ничего не отправляя.
#[test]
fn abort_closes_entry_without_submission() {
    let (engine, log) = MockEngine::new(vec![json!({"Raise": 0})], 0, Some(range(100, 900)));
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::BetOrRaise).expect("handle failed");
    session
        .handle(UiEvent::AmountChanged(Chips(700)))
        .expect("handle failed");
    session.handle(UiEvent::Abort).expect("handle failed");

    assert_eq!(session.controller().mode(), AmountMode::Idle);
    assert!(log.borrow().is_empty());
}

/// Событие против нелегального действия глотается: ничего не отправлено,
/// ошибок наверх нет (render() такие кнопки и так отключает).
#[test]
fn illegal_event_is_swallowed() {
    let (engine, log) = MockEngine::new(vec![json!("Check")], 0, None);
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::Call).expect("handle failed");
    assert!(log.borrow().is_empty());
}

/// Ошибка движка при act поднимается наверх; режим уже сброшен в Idle
/// (оптимистичный сброс до round-trip), intent не дублируется.
#[test]
fn act_failure_propagates_with_mode_already_reset() {
    let (mut engine, log) = MockEngine::new(vec![json!({"Bet": 0})], 0, Some(range(10, 500)));
    engine.fail_act = true;
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    session.handle(UiEvent::BetOrRaise).expect("handle failed");
    let result = session.handle(UiEvent::CommitAmount);

    assert!(matches!(result, Err(ApiError::EngineFault(_))));
    assert_eq!(session.controller().mode(), AmountMode::Idle);
    assert!(log.borrow().is_empty());
    // Контроллер остался на последних известных входах.
    assert!(session.controller().legality().bet);
}

/// Новый снимок полностью заменяет легальность: после него событие
/// по старой легальности уже не действует.
#[test]
fn stale_legality_is_not_actionable_after_refresh() {
    let (mut engine, log) = MockEngine::new(vec![json!("Call")], 50, None);
    // После первого act движок объявит только fold.
    engine.queue_actions(vec![json!("Fold")]);
    let mut session = TableSession::new(engine);
    session.start().expect("start failed");

    // Call легален, уходит в движок; refresh применяет второй список.
    session.handle(UiEvent::Call).expect("handle failed");
    assert_eq!(*log.borrow(), vec![ActionIntent::Call]);
    assert!(!session.controller().legality().call);
    assert!(session.controller().legality().fold);

    // Повторный Call — уже против нового снимка, глотается без отправки.
    session.handle(UiEvent::Call).expect("handle failed");
    assert_eq!(log.borrow().len(), 1);
}
