use crate::model::Window;
use tracing::warn;

/// Выбирает одно окно из кандидатов по порядковому номеру.
///
/// Без номера выигрывает первое совпадение. Номер за пределами списка
/// не считается ошибкой: берём первое окно и предупреждаем.
pub fn select<'a>(candidates: &[&'a Window], position: Option<usize>) -> Option<&'a Window> {
    let first = candidates.first().copied()?;

    match position {
        None => Some(first),
        Some(position) => match candidates.get(position) {
            Some(window) => Some(*window),
            None => {
                warn!(
                    "Окно #{} недоступно (совпало окон: {}), используется первое",
                    position,
                    candidates.len()
                );
                Some(first)
            }
        },
    }
}
