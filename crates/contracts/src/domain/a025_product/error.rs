//! Ошибки сервиса товаров и их классификация для пользователя

use serde_json::Value;

/// Код прикладной ошибки backend: товар с таким именем уже существует
pub const DUPLICATE_NAME_CODE: &str = "nombre_duplicado";

/// HTTP статус конфликта
pub const HTTP_CONFLICT: u16 = 409;

/// Ошибка вызова сервиса создания товара.
///
/// Все поля, кроме `detail`, необязательны: сетевая ошибка не несёт ни
/// статуса, ни тела ответа.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct ProductServiceError {
    /// Прикладной код ошибки из тела ответа
    pub code: Option<String>,
    /// HTTP статус
    pub status: Option<u16>,
    /// Сообщение для пользователя из тела ответа
    pub message: Option<String>,
    /// Полное описание для диагностики
    pub detail: String,
}

impl ProductServiceError {
    /// Ошибка до получения ответа (сеть, CORS, формирование запроса)
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    /// Ошибка по неуспешному HTTP ответу.
    ///
    /// Тело `{ "error": <код>, "message": <текст> }` необязательно. Поля
    /// читаются независимо: строкой считается только строковое значение.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let text_field = |name: &str| parsed.get(name).and_then(Value::as_str).map(str::to_string);
        let detail = if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, body)
        };
        Self {
            code: text_field("error"),
            status: Some(status),
            message: text_field("message"),
            detail,
        }
    }

    /// Свести ошибку к одному из вариантов, которые различает UI
    pub fn classify(&self) -> CreateFailure {
        let duplicate = self.code.as_deref() == Some(DUPLICATE_NAME_CODE)
            || self.status == Some(HTTP_CONFLICT);
        if duplicate {
            return CreateFailure::DuplicateName;
        }
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => CreateFailure::Message(msg.to_string()),
            _ => CreateFailure::Unclassified(self.detail.clone()),
        }
    }
}

/// Результат классификации ошибки создания
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateFailure {
    /// Товар с таким именем уже существует
    DuplicateName,
    /// Backend вернул текст для пользователя
    Message(String),
    /// Ничего понятного пользователю; `detail` только для логов
    Unclassified(String),
}
