//! Request/response bodies for `generateContent`.

use lingua_core::{Role, Turn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_turns(turns: &[Turn]) -> Self {
        let contents = turns
            .iter()
            .map(|turn| Content {
                role: Some(wire_role(turn.role).to_string()),
                parts: vec![Part {
                    text: turn.content.clone(),
                }],
            })
            .collect();
        Self { contents }
    }
}

/// The wire calls the assistant side "model".
fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First candidate's first part, if the response carries one.
    pub fn reply_text(&self) -> Option<String> {
        let part = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?;
        Some(part.text.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_roles_to_wire_names() {
        let turns = [Turn::assistant("Hi! Ready to practice?"), Turn::user("yes")];
        let request = GenerateContentRequest::from_turns(&turns);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["role"], "model");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hi! Ready to practice?");
        assert_eq!(body["contents"][1]["role"], "user");
    }

    #[test]
    fn test_reply_text_from_well_formed_response() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [ { "text": "Good morning!" } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.reply_text().as_deref(), Some("Good morning!"));
    }

    #[test]
    fn test_reply_text_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn test_reply_text_candidate_without_parts() {
        let raw = r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.reply_text().is_none());

        let raw = r#"{ "candidates": [ { "content": null } ] }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.reply_text().is_none());
    }
}
