// Petition generation: form validation → prompt assembly → one Gemini call.
// All LLM calls go through llm_client; nothing here talks to the provider.

pub mod builder;
pub mod form;
pub mod handlers;
pub mod prompts;
