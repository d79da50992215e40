//! Environment configuration.

use config::{Config, Environment};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::WebError;

/// Deserializes settings from the process environment.
///
/// Variable names are matched case-insensitively against field names, so
/// `QWERTY_SH` fills a field named `qwerty_sh`. Missing variables fall back
/// to the struct's serde defaults.
pub fn load_env<T: DeserializeOwned>() -> Result<T, WebError> {
    load(Environment::default())
}

/// Deserializes settings from `vars` instead of the process environment.
pub fn load_from<T, I, K, V>(vars: I) -> Result<T, WebError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    load(Environment::default().source(Some(vars)))
}

fn load<T: DeserializeOwned>(environment: Environment) -> Result<T, WebError> {
    let settings = Config::builder()
        .add_source(environment)
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Settings {
        #[serde(default = "default_greeting")]
        qwerty_greeting: String,
    }

    fn default_greeting() -> String {
        "hello".to_string()
    }

    #[test]
    fn test_default_when_unset() {
        let settings: Settings = load_from([("PATH", "/bin")]).unwrap();
        assert_eq!(settings.qwerty_greeting, "hello");
    }

    #[test]
    fn test_env_overrides_default() {
        let settings: Settings = load_from([("QWERTY_GREETING", "hi")]).unwrap();
        assert_eq!(settings.qwerty_greeting, "hi");
    }
}
