//! Request/response bodies of the chat completions API

use crew_chat_application::OracleError;
use crew_chat_domain::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for ChatMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub message: String,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Result<String, OracleError> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| OracleError::InvalidResponse("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| OracleError::InvalidResponse("Choice has no text content".to_string()))
    }
}

/// Map a non-success HTTP status and body to an oracle error
pub(super) fn status_error(status: u16, body: &str) -> OracleError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => OracleError::Unauthorized(message),
        408 | 504 => OracleError::Timeout,
        _ => OracleError::RequestFailed(format!("HTTP {}: {}", status, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let messages = vec![
            Message::system("You are Nami."),
            Message::user("Transferred to Luffy", "system"),
            Message::assistant("Follow the log pose!", "Nami"),
        ];
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: messages.iter().map(ChatMessage::from).collect(),
            temperature: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][2]["content"], "Follow the log pose!");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_first_choice_text() {
        let body = r#"{"id":"x","choices":[
            {"index":0,"message":{"role":"assistant","content":"Nami"}},
            {"index":1,"message":{"role":"assistant","content":"Luffy"}}
        ]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().unwrap(), "Nami");
    }

    #[test]
    fn test_empty_choices_is_invalid() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(OracleError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_status_error_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        match status_error(401, body) {
            OracleError::Unauthorized(msg) => assert_eq!(msg, "Incorrect API key provided"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(status_error(504, ""), OracleError::Timeout));
        match status_error(500, "upstream exploded") {
            OracleError::RequestFailed(msg) => assert_eq!(msg, "HTTP 500: upstream exploded"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
