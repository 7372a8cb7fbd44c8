pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub env_var: &'static str,
    pub models: &'static [ModelInfo],
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "gemini",
        name: "Google Gemini",
        env_var: "GEMINI_API_KEY",
        models: &[
            ModelInfo { id: "gemini-1.5-flash", label: "Gemini 1.5 Flash", recommended: true },
            ModelInfo { id: "gemini-2.5-flash", label: "Gemini 2.5 Flash", recommended: false },
            ModelInfo { id: "gemini-2.5-pro", label: "Gemini 2.5 Pro", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        models: &[
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: true },
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openai_compatible",
        name: "OpenAI-compatible endpoint",
        env_var: "OPENAI_API_KEY",
        models: &[
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: true },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> &'static str {
    if let Some(provider) = get_provider(provider_id) {
        provider.models.iter()
            .find(|m| m.recommended)
            .map(|m| m.id)
            .unwrap_or(provider.models[0].id)
    } else {
        "gemini-1.5-flash"
    }
}
