//! Prompt construction
//!
//! The system prompt fixes the report layout (plain text, uppercase headers,
//! three sections). Context, when supplied, is appended verbatim.

const SYSTEM_PROMPT: &str = "You are a Tier 3 Security Analyst. Analyze these logs for threats.\n\
STRICT PLAIN TEXT FORMAT (NO MARKDOWN):\n\
- UPPERCASE HEADERS\n\
- Hyphen bullet points\n\
- Timestamps: DATE: YYYY-MM-DD, TIME: HH:MM:SS UTC\n\
REPORT SECTIONS: 1. EXECUTIVE SUMMARY, 2. ANALYSIS, 3. REMEDIATION";

/// System and user halves of one analysis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    /// Single-text form for providers without a system role
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    context: Option<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn build(&self, log_data: &str) -> Prompt {
        let mut system = SYSTEM_PROMPT.to_string();
        if let Some(context) = &self.context {
            system.push_str("\nCONTEXT: ");
            system.push_str(context);
        }
        Prompt {
            system,
            user: format!("LOG DATA:\n{log_data}"),
        }
    }
}
