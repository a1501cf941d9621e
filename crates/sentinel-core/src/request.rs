use sentinel_llm::Message;

use crate::error::ReportError;

/// The system instruction and raw activity, in the order every backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    messages: [Message; 2],
}

impl ReportRequest {
    /// Pair the system instruction with the raw activity content.
    ///
    /// Both strings are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyActivity`] if `user_content` is empty or
    /// whitespace only.
    pub fn build(
        system_prompt: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let user_content = user_content.into();
        if user_content.trim().is_empty() {
            return Err(ReportError::EmptyActivity);
        }
        Ok(Self {
            messages: [Message::system(system_prompt), Message::user(user_content)],
        })
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    #[must_use]
    pub fn user_content(&self) -> &str {
        &self.messages[1].content
    }
}
