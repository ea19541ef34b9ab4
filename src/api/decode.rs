use log::debug;
use serde_json::Value;

use crate::api::dto::ActionDescriptor;
use crate::domain::chips::Chips;

/// Разбор гетерогенного списка легальных действий из JSON.
///
/// Порядок и кратность элементов не гарантируются, дубликаты не ломают разбор.
/// Незнакомые формы молча пропускаются: движок может объявить действие,
/// которое этот UI ещё не умеет рисовать, и это не ошибка.
pub fn decode_descriptors(values: &[Value]) -> Vec<ActionDescriptor> {
    values.iter().filter_map(decode_one).collect()
}

fn decode_one(value: &Value) -> Option<ActionDescriptor> {
    match value {
        Value::String(s) => match s.as_str() {
            "Call" => Some(ActionDescriptor::Call),
            "Check" => Some(ActionDescriptor::Check),
            "Fold" => Some(ActionDescriptor::Fold),
            other => {
                debug!("пропущен незнакомый дескриптор действия: {other:?}");
                None
            }
        },
        Value::Object(map) => {
            // Ключ важнее значения: {"Bet": null} — всё ещё bet.
            if map.contains_key("Bet") {
                Some(ActionDescriptor::Bet(object_amount(value, "Bet")))
            } else if map.contains_key("Raise") {
                Some(ActionDescriptor::Raise(object_amount(value, "Raise")))
            } else if map.contains_key("Call") {
                // Движок иногда присылает Call с суммой; сумму показываем
                // не отсюда, а из отдельного вызова call_amount.
                Some(ActionDescriptor::Call)
            } else {
                debug!("пропущен незнакомый дескриптор действия: {value}");
                None
            }
        }
        other => {
            debug!("пропущен незнакомый дескриптор действия: {other}");
            None
        }
    }
}

fn object_amount(value: &Value, key: &str) -> Chips {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(Chips)
        .unwrap_or(Chips::ZERO)
}
