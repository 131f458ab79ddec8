/// An OpenAI-chat-completion-compatible backend, selected from the shape of
/// the API credential. A `gsk_` prefix marks a Groq key; anything else is
/// routed to OpenAI. Inferring the provider from the secret is a convention
/// inherited from the deployment this replaces; a future provider whose keys
/// collide with an existing prefix would need an explicit config field
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Groq,
}

impl Provider {
    pub fn from_credential(api_key: &str) -> Self {
        if api_key.starts_with("gsk_") {
            Provider::Groq
        } else {
            Provider::OpenAi
        }
    }

    /// Chat-completion endpoint for this provider.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
            Provider::Groq => "https://api.groq.com/openai/v1/chat/completions",
        }
    }

    /// Model identifier sent in the request body.
    pub fn model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-3.5-turbo",
            Provider::Groq => "llama3-8b-8192",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_prefix_selects_groq() {
        let provider = Provider::from_credential("gsk_abc123");
        assert_eq!(provider, Provider::Groq);
        assert_eq!(
            provider.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(provider.model(), "llama3-8b-8192");
    }

    #[test]
    fn other_keys_select_openai() {
        for key in ["sk-abc123", "key-without-known-prefix", "GSK_upper"] {
            let provider = Provider::from_credential(key);
            assert_eq!(provider, Provider::OpenAi);
            assert_eq!(
                provider.endpoint(),
                "https://api.openai.com/v1/chat/completions"
            );
            assert_eq!(provider.model(), "gpt-3.5-turbo");
        }
    }
}
