//! Stored message format
//!
//! A stored collection is a JSON array of `[text, {attributes}]` pairs in
//! collection order.

use alerts_core::{AlertsError, AlertsResult, Message, MessageCollection};

/// Encode every message as a `[text, {attributes}]` pair
pub fn encode_pairs<'a, I>(messages: I) -> serde_json::Value
where
	I: IntoIterator<Item = &'a Message>,
{
	serde_json::Value::Array(messages.into_iter().map(encode_pair).collect())
}

fn encode_pair(message: &Message) -> serde_json::Value {
	let attributes = message
		.attributes()
		.iter()
		.map(|(key, value)| (key.clone(), value.to_json()))
		.collect::<serde_json::Map<_, _>>();
	serde_json::Value::Array(vec![
		serde_json::Value::String(message.text().to_string()),
		serde_json::Value::Object(attributes),
	])
}

/// Decode a stored payload; fails as a whole if any entry is not a message
pub fn decode_pairs(payload: serde_json::Value) -> AlertsResult<Vec<Message>> {
	match payload {
		serde_json::Value::Array(items) => items.into_iter().map(Message::try_from).collect(),
		_ => Err(AlertsError::InvalidMessageType(
			"stored alerts must be an array of [text, attributes] pairs".to_string(),
		)),
	}
}

/// Encode a whole collection
pub fn encode_collection(messages: &MessageCollection) -> serde_json::Value {
	encode_pairs(messages)
}
