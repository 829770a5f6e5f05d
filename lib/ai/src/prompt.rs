//! Fixed prompt templates.
//!
//! Each gateway task has one immutable template with a single payload
//! insertion point. Rendering is pure string substitution; the payload is
//! embedded into a plain-text prompt unmodified. No escaping is performed;
//! the only consumer of the rendered string is the inference server's text
//! channel.

/// Which fixed prompt template applies to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Security review of a code snippet.
    CodeAnalysis,
    /// Free-form security Q&A.
    Chat,
    /// Threat triage of log excerpts.
    ThreatDetect,
}

const CODE_ANALYSIS_TEMPLATE: &str = "You are a cybersecurity expert. Analyze the following code for security vulnerabilities, potential exploits, and provide recommendations for improvement.\n\nCode:\n```\n{{payload}}\n```\n\nProvide a detailed security analysis including:\n1. Identified vulnerabilities\n2. Severity level (Critical/High/Medium/Low)\n3. Recommended fixes\n4. Best practices to follow\n";

const CHAT_TEMPLATE: &str =
    "You are a cybersecurity AI assistant. Answer the following question:\n\n{{payload}}";

const THREAT_DETECT_TEMPLATE: &str = "You are a threat detection AI. Analyze the following logs for potential security threats, anomalies, or suspicious activities.\n\nLogs:\n{{payload}}\n\nProvide:\n1. Detected threats or anomalies\n2. Risk level\n3. Recommended actions\n";

impl TaskKind {
    /// Returns the fixed template for this task.
    #[must_use]
    pub fn template(self) -> PromptTemplate {
        let content = match self {
            Self::CodeAnalysis => CODE_ANALYSIS_TEMPLATE,
            Self::Chat => CHAT_TEMPLATE,
            Self::ThreatDetect => THREAT_DETECT_TEMPLATE,
        };
        PromptTemplate { content }
    }

    /// Renders this task's template with the given payload.
    ///
    /// Callers must have already rejected empty payloads; an all-whitespace
    /// payload never reaches this function through the gateway.
    #[must_use]
    pub fn render(self, payload: &str) -> String {
        self.template().render(payload)
    }
}

/// A fixed prompt template with a single `{{payload}}` insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    content: &'static str,
}

impl PromptTemplate {
    /// Substitutes the payload into the template's insertion point.
    #[must_use]
    pub fn render(self, payload: &str) -> String {
        self.content.replace("{{payload}}", payload)
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn content(self) -> &'static str {
        self.content
    }
}
