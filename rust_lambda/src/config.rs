pub(crate) const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:ap-south-1:560905053644:s3-lambda-sns";

const TOPIC_ARN_VAR: &str = "TOPIC_ARN";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let topic_arn = lookup(TOPIC_ARN_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TOPIC_ARN.to_string());
        Self { topic_arn }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic_arn: DEFAULT_TOPIC_ARN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topic_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.topic_arn, DEFAULT_TOPIC_ARN);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_topic_when_blank() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.topic_arn, DEFAULT_TOPIC_ARN);
    }

    #[test]
    fn test_topic_override() {
        let config = Config::from_lookup(|name| {
            (name == "TOPIC_ARN").then(|| "arn:aws:sns:us-east-1:000000000000:other".to_string())
        });
        assert_eq!(config.topic_arn, "arn:aws:sns:us-east-1:000000000000:other");
    }
}
