/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The caller-facing decode pipeline.
//!
//! One entry point: raw text in, [`DecodedMessage`] out. Version detection,
//! specification resolution, and decoding are composed here; every failure
//! mode is carried in the result value, never raised.

use crate::builder::EngineBuilder;
use fixlens_core::{DecodeError, DecodedField, DecodedMessage, FixVersion, VERSION_PSEUDO_TAG};
use fixlens_decoder::MessageDecoder;
use fixlens_dictionary::{SpecProvider, Specification};
use tracing::debug;

/// High-level FIX decode engine.
///
/// Owns the specification provider and its process-lifetime memory cache.
/// `decode` is safe to call from multiple threads.
#[derive(Debug)]
pub struct DecodeEngine {
    provider: SpecProvider,
}

impl DecodeEngine {
    /// Creates an engine with the default specification source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(SpecProvider::new())
    }

    /// Creates an engine around an existing provider.
    #[must_use]
    pub fn with_provider(provider: SpecProvider) -> Self {
        Self { provider }
    }

    /// Returns a builder for fluent configuration.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Decodes one raw FIX message.
    ///
    /// Never fails: decode problems are reported through
    /// [`DecodedMessage::error`]. A successful result always starts with
    /// the synthetic version pseudo-field.
    ///
    /// # Arguments
    /// * `raw` - The raw message text, in any supported delimiter convention
    pub fn decode(&self, raw: &str) -> DecodedMessage {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DecodedMessage::with_error(raw, DecodeError::EmptyMessage.to_string());
        }

        let version = FixVersion::detect(trimmed);
        let spec = self.provider.resolve(version);
        debug!(
            version = %version,
            spec_fields = spec.field_count(),
            "decoding message"
        );

        match MessageDecoder::decode(trimmed, &spec) {
            Ok(mut fields) => {
                fields.insert(0, version_pseudo_field(version, &spec));
                DecodedMessage::new(raw, fields)
            }
            Err(err) => DecodedMessage::with_error(raw, err.to_string()),
        }
    }

    /// Decodes multi-line input, one message per non-blank line,
    /// sequentially.
    pub fn decode_lines(&self, input: &str) -> Vec<DecodedMessage> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.decode(line))
            .collect()
    }

    /// Returns the underlying specification provider.
    #[must_use]
    pub fn provider(&self) -> &SpecProvider {
        &self.provider
    }
}

impl Default for DecodeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the synthetic leading pseudo-field describing the detected
/// version and the size of the resolved specification.
fn version_pseudo_field(version: FixVersion, spec: &Specification) -> DecodedField {
    DecodedField::new(VERSION_PSEUDO_TAG, "ProtocolVersion", version.display_name())
        .with_description(format!(
            "Detected protocol version {} ({} field definitions in specification)",
            version.display_name(),
            spec.field_count()
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_core::ProviderError;
    use fixlens_dictionary::SpecFetcher;
    use tempfile::tempdir;

    /// The specification document served to the offline test engine.
    const DOC: &str = r#"<fix>
  <fields>
    <field number="8" name="BeginString" type="STRING"/>
    <field number="9" name="BodyLength" type="LENGTH"/>
    <field number="10" name="CheckSum" type="STRING"/>
    <field number="11" name="ClOrdID" type="STRING"/>
    <field number="34" name="MsgSeqNum" type="SEQNUM"/>
    <field number="35" name="MsgType" type="STRING"/>
    <field number="38" name="OrderQty" type="QTY"/>
    <field number="40" name="OrdType" type="CHAR">
      <value enum="1" description="Market"/>
      <value enum="2" description="Limit"/>
    </field>
    <field number="44" name="Price" type="PRICE"/>
    <field number="49" name="SenderCompID" type="STRING"/>
    <field number="52" name="SendingTime" type="UTCTIMESTAMP"/>
    <field number="54" name="Side" type="CHAR">
      <value enum="1" description="Buy"/>
      <value enum="2" description="Sell"/>
    </field>
    <field number="55" name="Symbol" type="STRING"/>
    <field number="56" name="TargetCompID" type="STRING"/>
    <field number="59" name="TimeInForce" type="CHAR"/>
    <field number="21" name="HandlInst" type="CHAR"/>
  </fields>
</fix>"#;

    struct StaticFetcher;

    impl SpecFetcher for StaticFetcher {
        fn fetch(&self, _version: FixVersion) -> Result<String, ProviderError> {
            Ok(DOC.to_string())
        }
    }

    struct DeadFetcher;

    impl SpecFetcher for DeadFetcher {
        fn fetch(&self, _version: FixVersion) -> Result<String, ProviderError> {
            Err(ProviderError::Http("connection refused".to_string()))
        }
    }

    fn offline_engine(dir: &std::path::Path) -> DecodeEngine {
        DecodeEngine::builder()
            .with_fetcher(Box::new(StaticFetcher))
            .with_cache_dir(dir)
            .build()
    }

    const NEW_ORDER: &str = "8=FIX.4.4|9=178|35=D|49=SENDER|56=TARGET|34=1|52=20230101-10:30:00|\
                             11=ORDER123|21=1|55=MSFT|54=1|38=100|40=2|44=150.50|59=0|10=123";

    #[test]
    fn test_decode_new_order_single() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let message = engine.decode(NEW_ORDER);
        assert!(message.is_ok());

        let fields = &message.fields;
        assert_eq!(fields[0].tag, VERSION_PSEUDO_TAG);
        assert_eq!(fields[0].raw_value, "FIX 4.4");
        assert_eq!(fields[1].tag, "8");
        assert_eq!(fields[1].name, "BeginString");
        assert_eq!(fields.last().unwrap().tag, "10");

        let side = fields.iter().find(|f| f.tag == "54").unwrap();
        assert_eq!(side.semantic_value, "Buy");
        let ord_type = fields.iter().find(|f| f.tag == "40").unwrap();
        assert_eq!(ord_type.semantic_value, "Limit");
    }

    #[test]
    fn test_version_pseudo_field_describes_spec_size() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let message = engine.decode(NEW_ORDER);
        let version = &message.fields[0];
        assert!(version.is_version_pseudo_field());
        assert!(version.description.contains("FIX 4.4"));
        assert!(version.description.contains("16 field definitions"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let message = engine.decode("   ");
        assert!(!message.is_ok());
        assert!(message.fields.is_empty());
        assert_eq!(message.error.as_deref(), Some("empty message"));
    }

    #[test]
    fn test_garbage_input_reports_both_strategies() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let message = engine.decode("complete nonsense");
        let error = message.error.unwrap();
        assert!(error.contains("structured strategy failed"));
        assert!(error.contains("manual strategy failed"));
    }

    #[test]
    fn test_degraded_engine_still_decodes() {
        let dir = tempdir().unwrap();
        let engine = DecodeEngine::builder()
            .with_fetcher(Box::new(DeadFetcher))
            .with_cache_dir(dir.path().join("missing"))
            .build();

        // Minimal fallback spec: structural tags named, Side via the
        // built-in semantic table.
        let message = engine.decode(NEW_ORDER);
        assert!(message.is_ok());
        assert_eq!(message.fields[1].name, "BeginString");
        let side = message.fields.iter().find(|f| f.tag == "54").unwrap();
        assert_eq!(side.name, "Tag54");
        assert_eq!(side.semantic_value, "Buy");
    }

    #[test]
    fn test_decode_is_deterministic() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let first = engine.decode(NEW_ORDER);
        let second = engine.decode(NEW_ORDER);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_lines() {
        let dir = tempdir().unwrap();
        let engine = offline_engine(dir.path());

        let input = format!("{NEW_ORDER}\n\n8=FIX.4.2|35=0|10=111\n");
        let messages = engine.decode_lines(&input);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_ok());
        assert!(messages[1].is_ok());
        assert_eq!(messages[1].fields[0].raw_value, "FIX 4.2");
    }
}
