//! Builder patterns for ergonomic construction of A2A types.

use crate::types::*;

/// Builder for constructing [`AgentCard`] with sensible defaults.
///
/// # Example
///
/// ```
/// use a2a_protocol::builders::AgentCardBuilder;
///
/// let card = AgentCardBuilder::new("My Agent", "http://localhost:8080/a2a", "1.0.0")
///     .with_description("An example agent")
///     .with_streaming(true)
///     .with_skill("chat", "Chat", Some("Conversational AI".to_string()))
///     .build();
/// assert_eq!(card.default_input_modes, vec!["text"]);
/// ```
#[derive(Debug, Clone)]
pub struct AgentCardBuilder {
    name: String,
    url: String,
    version: String,
    description: Option<String>,
    provider: Option<AgentProvider>,
    documentation_url: Option<String>,
    capabilities: AgentCapabilities,
    authentication: Option<AgentAuthentication>,
    default_input_modes: Vec<String>,
    default_output_modes: Vec<String>,
    skills: Vec<AgentSkill>,
}

impl AgentCardBuilder {
    /// Create a new builder with the required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable agent name
    /// * `url` - Base URL of the agent's A2A endpoint
    /// * `version` - Version string (e.g. "1.0.0")
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            version: version.into(),
            description: None,
            provider: None,
            documentation_url: None,
            capabilities: AgentCapabilities::default(),
            authentication: None,
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            skills: Vec::new(),
        }
    }

    /// Set the agent description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the provider information.
    pub fn with_provider(
        mut self,
        organization: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        self.provider = Some(AgentProvider {
            organization: organization.into(),
            url,
        });
        self
    }

    /// Set the documentation URL.
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Enable or disable streaming support.
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.capabilities.streaming = enabled;
        self
    }

    /// Enable or disable push notification support.
    pub fn with_push_notifications(mut self, enabled: bool) -> Self {
        self.capabilities.push_notifications = enabled;
        self
    }

    /// Enable or disable state transition history.
    pub fn with_state_transition_history(mut self, enabled: bool) -> Self {
        self.capabilities.state_transition_history = enabled;
        self
    }

    /// Set the authentication requirements.
    pub fn with_authentication(mut self, authentication: AgentAuthentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Override the default input modes (default: `["text"]`).
    pub fn with_input_modes(mut self, modes: Vec<String>) -> Self {
        self.default_input_modes = modes;
        self
    }

    /// Override the default output modes (default: `["text"]`).
    pub fn with_output_modes(mut self, modes: Vec<String>) -> Self {
        self.default_output_modes = modes;
        self
    }

    /// Add a skill by id, name, and optional description.
    pub fn with_skill(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        self.skills.push(AgentSkill {
            id: id.into(),
            name: name.into(),
            description,
            tags: None,
            examples: None,
            input_modes: None,
            output_modes: None,
        });
        self
    }

    /// Add a fully-specified skill.
    pub fn with_full_skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Build the [`AgentCard`].
    pub fn build(self) -> AgentCard {
        AgentCard {
            name: self.name,
            url: self.url,
            version: self.version,
            description: self.description,
            provider: self.provider,
            documentation_url: self.documentation_url,
            capabilities: self.capabilities,
            authentication: self.authentication,
            default_input_modes: self.default_input_modes,
            default_output_modes: self.default_output_modes,
            skills: self.skills,
        }
    }
}
