// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts whose answer is parsed as JSON.
/// `gemini-pro` has no system role, so this travels inside the user prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
