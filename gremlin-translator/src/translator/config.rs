use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_NAME: &str = "g";
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How string literals are placed between single quotes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StringQuoting {
    /// Interpolate the string as-is. Embedded `'` produce invalid scripts.
    #[default]
    Verbatim,
    /// Backslash-escape `\` and `'`.
    Escaped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatorConfig {
    #[serde(default = "default_source_name")]
    pub source_name: String,
    #[serde(default)]
    pub include_source_instructions: bool,
    #[serde(default)]
    pub string_quoting: StringQuoting,
    /// `None` leaves nesting unbounded. Written as `0` in config files.
    #[serde(default = "default_max_depth", with = "depth_limit")]
    pub max_depth: Option<usize>,
}

fn default_source_name() -> String {
    DEFAULT_SOURCE_NAME.to_string()
}

fn default_max_depth() -> Option<usize> {
    Some(DEFAULT_MAX_DEPTH)
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_name: default_source_name(),
            include_source_instructions: false,
            string_quoting: StringQuoting::default(),
            max_depth: default_max_depth(),
        }
    }
}

impl TranslatorConfig {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    pub fn with_source_instructions(mut self, include: bool) -> Self {
        self.include_source_instructions = include;
        self
    }

    pub fn with_string_quoting(mut self, quoting: StringQuoting) -> Self {
        self.string_quoting = quoting;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

mod depth_limit {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(limit: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(limit.unwrap_or(0) as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limit = usize::deserialize(deserializer)?;
        Ok((limit > 0).then_some(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.source_name, "g");
        assert!(!config.include_source_instructions);
        assert_eq!(config.string_quoting, StringQuoting::Verbatim);
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TranslatorConfig = serde_json::from_str(r#"{"source_name":"t"}"#).unwrap();
        assert_eq!(config, TranslatorConfig::new("t"));
    }

    #[test]
    fn test_zero_depth_means_unbounded() {
        let config: TranslatorConfig =
            serde_json::from_str(r#"{"max_depth":0,"string_quoting":"escaped"}"#).unwrap();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.string_quoting, StringQuoting::Escaped);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""max_depth":0"#));
    }

    #[test]
    fn test_builder_methods() {
        let config = TranslatorConfig::new("traversal")
            .with_source_instructions(true)
            .with_string_quoting(StringQuoting::Escaped)
            .with_max_depth(Some(8));
        assert_eq!(config.source_name, "traversal");
        assert!(config.include_source_instructions);
        assert_eq!(config.string_quoting, StringQuoting::Escaped);
        assert_eq!(config.max_depth, Some(8));
    }
}
