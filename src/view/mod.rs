//! Простая отрисовочная модель: карты, строка игрока, строка банка.
//!
//! Сюда уходят плоские данные из снимка, обратно никаких событий не приходит.

pub mod card_view;
pub mod player_line;
pub mod pot_line;

pub use card_view::*;
pub use player_line::*;
pub use pot_line::*;
