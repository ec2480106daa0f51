//! Request module - the immutable input of a single generation run

/// Everything needed to ask the completion service for one configuration.
///
/// Assembled once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Raw JSON schema text, embedded verbatim in the prompt (never parsed)
    pub schema_text: String,

    /// Target device category (router, switch, firewall, server, ...)
    pub device_type: String,

    /// Free-form natural-language description of the desired configuration
    pub context: String,
}

impl GenerationRequest {
    /// Create a new request
    ///
    /// # Examples
    ///
    /// ```
    /// use configgen_domain::GenerationRequest;
    ///
    /// let request = GenerationRequest::new("{}", "router", "small office");
    /// assert_eq!(request.device_type, "router");
    /// ```
    pub fn new(
        schema_text: impl Into<String>,
        device_type: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            schema_text: schema_text.into(),
            device_type: device_type.into(),
            context: context.into(),
        }
    }
}
