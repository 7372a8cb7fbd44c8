use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "github": {
                "type": "object",
                "properties": {
                    "token": { "type": "string" },
                    "api_base": { "type": "string" },
                    "raw_base": { "type": "string" },
                    "strategy": { "type": "string", "enum": ["contents", "git_tree"] },
                    "max_depth": { "type": "integer", "minimum": 1 }
                }
            },
            "llm": {
                "type": "object",
                "properties": {
                    "provider": { "type": "string" },
                    "model": { "type": "string" },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string" }
                }
            },
            "limits": {
                "type": "object",
                "properties": {
                    "file_char_budget": { "type": "integer", "minimum": 1 },
                    "prompt_char_budget": { "type": "integer", "minimum": 1 },
                    "tree_item_limit": { "type": "integer", "minimum": 1 },
                    "max_files": { "type": "integer", "minimum": 1 },
                    "important_files": { "type": "array", "items": { "type": "string" } }
                }
            },
            "http": {
                "type": "object",
                "properties": {
                    "timeout_secs": { "type": "integer", "minimum": 1 },
                    "user_agent": { "type": "string" }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            }
        }
    })
});
