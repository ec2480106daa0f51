//! Integration tests for the Generator

#[cfg(test)]
mod tests {
    use crate::{load_schema, ExtractorError, GenerationConfig, Generator};
    use configgen_domain::GenerationRequest;
    use configgen_llm::MockClient;
    use std::io::Write;

    fn write_schema(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_generation_flow() {
        let schema_file = write_schema(r#"{"type": "object", "properties": {"hostname": {"type": "string"}}}"#);
        let schema = load_schema(schema_file.path()).unwrap();

        let client = MockClient::new(["```yaml\n", "hostname: ", "r1\n", "```"]);
        let generator = Generator::new(client.clone(), GenerationConfig::default())
            .with_assistant_id("asst-42");

        let request = GenerationRequest::new(schema.clone(), "router", "small office, 4 ports");
        let outcome = generator.generate(&request).await.unwrap();

        assert_eq!(outcome.document.as_str(), "hostname: r1");
        assert_eq!(outcome.metadata.chunk_count, 4);

        // The request sent upstream carries the prompt and sampling settings
        let sent = client.last_request().unwrap();
        assert_eq!(sent.assistant_id.as_deref(), Some("asst-42"));
        assert!(sent.stream);
        assert_eq!(sent.temperature, 0.7);
        assert_eq!(sent.top_p, 0.95);
        assert_eq!(sent.messages.len(), 1);
        assert_eq!(sent.messages[0].role, "user");

        let prompt = sent.prompt_text().unwrap();
        assert!(prompt.contains(&schema));
        assert!(prompt.contains("YAML configuration for a router"));
        assert!(prompt.contains("small office, 4 ports"));
    }

    #[tokio::test]
    async fn test_generation_with_prose_and_comments() {
        let client = MockClient::new([
            "Here is your config:\n",
            "```yaml\n",
            "# generated\n",
            "hostname: fw1\n\n",
            "rules:\n",
            "  - allow: ssh\n",
            "```",
        ]);
        let generator = Generator::new(client, GenerationConfig::default());

        let request = GenerationRequest::new("{}", "firewall", "edge firewall");
        let outcome = generator.generate(&request).await.unwrap();

        assert_eq!(outcome.document.as_str(), "hostname: fw1\nrules:\n  - allow: ssh");
    }

    #[tokio::test]
    async fn test_custom_sampling_is_forwarded() {
        let client = MockClient::new(["a: 1"]);
        let config = GenerationConfig {
            temperature: 0.1,
            top_p: 0.5,
        };
        let generator = Generator::new(client.clone(), config);

        generator
            .generate(&GenerationRequest::new("{}", "server", "web"))
            .await
            .unwrap();

        let sent = client.last_request().unwrap();
        assert_eq!(sent.temperature, 0.1);
        assert_eq!(sent.top_p, 0.5);
        assert!(sent.assistant_id.is_none());
    }

    #[tokio::test]
    async fn test_generation_stream_refused() {
        let client = MockClient::new(["a: 1"]).refuse_request();
        let generator = Generator::new(client, GenerationConfig::default());

        let result = generator
            .generate(&GenerationRequest::new("{}", "router", "lab"))
            .await;
        assert!(matches!(result, Err(ExtractorError::StreamStart(_))));
    }

    #[tokio::test]
    async fn test_generation_stream_interrupted() {
        let client = MockClient::new(["hostname: ", "r1"]).fail_after(1);
        let generator = Generator::new(client, GenerationConfig::default());

        let result = generator
            .generate(&GenerationRequest::new("{}", "router", "lab"))
            .await;
        assert!(matches!(result, Err(ExtractorError::StreamRead(_))));
    }

    #[tokio::test]
    async fn test_generation_without_yaml() {
        let client = MockClient::new(["no colons here at all"]);
        let generator = Generator::new(client, GenerationConfig::default());

        let result = generator
            .generate(&GenerationRequest::new("{}", "router", "lab"))
            .await;
        match result {
            Err(e @ ExtractorError::EmptyDocument) => {
                assert_eq!(e.to_string(), "received empty YAML content from AI.YOU");
            }
            other => panic!("Expected EmptyDocument, got {:?}", other.map(|o| o.document)),
        }
    }
}
