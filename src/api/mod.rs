//! Граница с внешним игровым движком.
//!
//! Здесь описываются:
//! - DTO (dto.rs) — снимок игры, диапазон суммы и дескрипторы легальных действий;
//! - decode.rs — разбор гетерогенного списка дескрипторов ровно один раз на границе;
//! - client.rs — трейт с пятью вызовами движка (request/response);
//! - errors.rs — ошибки границы, которые поднимаем хост-оболочке.

pub mod client;
pub mod decode;
pub mod dto;
pub mod errors;

pub use client::*;
pub use decode::*;
pub use dto::*;
pub use errors::*;
