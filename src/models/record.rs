use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One content block of a message, classified by its `type` tag
///
/// Every variant keeps the complete JSON object so that blocks which are not
/// removed serialize back exactly as they were read.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(Value),
    Thinking(Value),
    RedactedThinking(Value),
    ToolUse(Value),
    ToolResult(Value),
    /// Unknown `type`, missing `type`, or a block that is not an object
    Other(Value),
}

impl ContentBlock {
    pub fn from_value(value: Value) -> Self {
        let tag = value.get("type").and_then(Value::as_str).unwrap_or_default();
        match tag {
            "text" => ContentBlock::Text(value),
            "thinking" => ContentBlock::Thinking(value),
            "redacted_thinking" => ContentBlock::RedactedThinking(value),
            "tool_use" => ContentBlock::ToolUse(value),
            "tool_result" => ContentBlock::ToolResult(value),
            _ => ContentBlock::Other(value),
        }
    }

    /// True for both `thinking` and `redacted_thinking` blocks
    pub fn is_thinking(&self) -> bool {
        matches!(self, ContentBlock::Thinking(_) | ContentBlock::RedactedThinking(_))
    }

    pub fn as_value(&self) -> &Value {
        match self {
            ContentBlock::Text(v)
            | ContentBlock::Thinking(v)
            | ContentBlock::RedactedThinking(v)
            | ContentBlock::ToolUse(v)
            | ContentBlock::ToolResult(v)
            | ContentBlock::Other(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ContentBlock::Text(v)
            | ContentBlock::Thinking(v)
            | ContentBlock::RedactedThinking(v)
            | ContentBlock::ToolUse(v)
            | ContentBlock::ToolResult(v)
            | ContentBlock::Other(v) => v,
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ContentBlock::from_value)
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_value().serialize(serializer)
    }
}

/// An `"type":"assistant"` record with its `message.content` array lifted out
///
/// The array slot inside `fields` is left as `null` while lifted so the key keeps
/// its position when the record is reassembled.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantRecord {
    fields: Map<String, Value>,
    content: Option<Vec<ContentBlock>>,
}

impl AssistantRecord {
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        let content = fields
            .get_mut("message")
            .and_then(|message| message.get_mut("content"))
            .filter(|content| content.is_array())
            .and_then(|content| match content.take() {
                Value::Array(items) => {
                    Some(items.into_iter().map(ContentBlock::from_value).collect())
                }
                _ => None,
            });

        Self { fields, content }
    }

    /// Content blocks, or `None` when `message.content` is absent or a plain string
    pub fn content(&self) -> Option<&[ContentBlock]> {
        self.content.as_deref()
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<ContentBlock>> {
        self.content.as_mut()
    }

    pub fn into_value(mut self) -> Value {
        if let Some(blocks) = self.content
            && let Some(slot) =
                self.fields.get_mut("message").and_then(|message| message.get_mut("content"))
        {
            *slot = Value::Array(blocks.into_iter().map(ContentBlock::into_value).collect());
        }
        Value::Object(self.fields)
    }
}

/// One transcript line after decoding
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    User(Map<String, Value>),
    Assistant(AssistantRecord),
    System(Map<String, Value>),
    /// A JSON object with some other `type` (`summary`, `file-history-snapshot`, ...)
    Other(Map<String, Value>),
    /// Empty or whitespace-only line
    Blank,
    /// The raw line, lossily decoded, for input that is not a JSON object
    Unparseable(String),
}

impl Record {
    /// Classify a decoded JSON object by its `type` discriminant
    pub fn from_object(fields: Map<String, Value>) -> Self {
        let tag = fields.get("type").and_then(Value::as_str).unwrap_or_default();
        match tag {
            "user" => Record::User(fields),
            "assistant" => Record::Assistant(AssistantRecord::from_fields(fields)),
            "system" => Record::System(fields),
            _ => Record::Other(fields),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::User(_) => "user",
            Record::Assistant(_) => "assistant",
            Record::System(_) => "system",
            Record::Other(_) => "other",
            Record::Blank => "blank",
            Record::Unparseable(_) => "unparseable",
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, Record::Unparseable(_))
    }

    /// Compact JSON for the record, `None` for blank and unparseable lines
    pub fn into_json(self) -> Option<String> {
        let value = match self {
            Record::User(fields) | Record::System(fields) | Record::Other(fields) => {
                Value::Object(fields)
            }
            Record::Assistant(record) => record.into_value(),
            Record::Blank | Record::Unparseable(_) => return None,
        };
        Some(value.to_string())
    }
}
