//! AMI wire frames
//!
//! The manager protocol is line-based: a frame is a sequence of
//! `Key: Value` lines terminated by one empty line. Actions go out in
//! that shape and responses come back in it.

use std::fmt;

/// An outbound manager action
///
/// Field order is preserved; Asterisk requires `Action` first, which
/// the constructor pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmiAction {
    fields: Vec<(String, String)>,
}

impl AmiAction {
    /// Start an action frame, e.g. `AmiAction::new("Originate")`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![("Action".to_string(), name.into())],
        }
    }

    /// Append a header field
    ///
    /// Values are stripped of CR/LF so a caller-provided string can
    /// never terminate the frame early.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value
            .into()
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ");
        self.fields.push((key.into(), value));
        self
    }

    /// The action name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields[0].1
    }

    /// Serialize to the wire format, including the terminating blank
    /// line
    #[must_use]
    pub fn to_wire(&self) -> String {
        let mut frame = String::new();
        for (key, value) in &self.fields {
            frame.push_str(key);
            frame.push_str(": ");
            frame.push_str(value);
            frame.push_str("\r\n");
        }
        frame.push_str("\r\n");
        frame
    }
}

impl fmt::Display for AmiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inbound manager response frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmiResponse {
    fields: Vec<(String, String)>,
}

impl AmiResponse {
    /// Parse one frame from its lines (without the terminating blank
    /// line)
    ///
    /// Lines without a colon are tolerated and skipped; Asterisk
    /// occasionally emits free-form output lines inside responses.
    #[must_use]
    pub fn parse<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields = lines
            .into_iter()
            .filter_map(|line| {
                line.split_once(':')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            })
            .collect();
        Self { fields }
    }

    /// First value for a header key (case-insensitive)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether this frame reports `Response: Success`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.get("Response")
            .is_some_and(|v| v.eq_ignore_ascii_case("Success"))
    }

    /// Whether this frame is an unsolicited event, not a response
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.get("Event").is_some() && self.get("Response").is_none()
    }

    /// The `Message` header, or a placeholder when absent
    #[must_use]
    pub fn message(&self) -> &str {
        self.get("Message").unwrap_or("(no message)")
    }
}
