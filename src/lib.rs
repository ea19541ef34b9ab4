//! Клиентское ядро покерного стола.
//!
//! Этот крейт НЕ знает правил покера: оценка рук, банк, очередность ходов и
//! легальность действий живут во внешнем движке (см. `api::EngineClient`).
//! Здесь только то, что нужно стороне игрока:
//! - декодирование объявленных движком легальных действий (`controller::Legality`);
//! - конечный автомат ввода суммы bet/raise (`controller::AmountInput`);
//! - контроллер, который собирает описание панели действий и эмитит
//!   ровно один `ActionIntent` на решение игрока (`controller::ActionController`);
//! - презентационная модель стола (карты, игроки, банк) и слой координации
//!   снимков (`session::TableSession`).

pub mod api;
pub mod controller;
pub mod domain;
pub mod session;
pub mod view;

// Удобные реэкспорты для хост-приложения.
pub use api::{AmountRange, ApiError, EngineClient, GameSnapshot};
pub use controller::{ActionController, ActionIntent, ActionPanel, AmountMode, Legality};
pub use session::{TableRender, TableSession, UiEvent};
