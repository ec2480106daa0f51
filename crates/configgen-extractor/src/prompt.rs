//! LLM prompt for configuration generation

use configgen_domain::GenerationRequest;

/// Builds the instruction prompt sent to the completion service
pub struct PromptBuilder<'a> {
    request: &'a GenerationRequest,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. The schema, verbatim
        prompt.push_str(SCHEMA_INTRO);
        prompt.push_str("\n\n");
        prompt.push_str(&self.request.schema_text);
        prompt.push_str("\n\n");

        // 2. Device type and context
        prompt.push_str(&format!(
            "Generate a YAML configuration for a {} with the following context: {}.\n\n",
            self.request.device_type, self.request.context
        ));

        // 3. Formatting directives
        prompt.push_str(OUTPUT_INSTRUCTIONS);

        prompt
    }
}

const SCHEMA_INTRO: &str = "Using the following JSON schema as validation reference:";

const OUTPUT_INSTRUCTIONS: &str = r#"Important instructions:
1. Response must be ONLY the YAML configuration
2. No explanations or comments
3. Strictly follow the schema structure
4. No markdown formatting or code block markers"#;
