//! Презентационная модель стола: карты, фишки, игроки.
//!
//! Это "плоские" данные для отрисовки. Никакой игровой логики здесь нет —
//! движок присылает их в составе снимка, UI только показывает.

pub mod card;
pub mod chips;
pub mod player;

pub use card::*;
pub use chips::*;
pub use player::*;
