//! Pre-filled outbound message links

use url::Url;

use crate::config::SimulatorConfig;
use crate::error::SimulationResult;

/// Build `{share_base_url}?phone=...&text=...` with the text encoded once.
pub fn share_link(config: &SimulatorConfig, text: &str) -> SimulationResult<Url> {
    let mut url = Url::parse(&config.share_base_url)?;
    url.query_pairs_mut()
        .append_pair("phone", &config.contact_phone)
        .append_pair("text", text);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link() {
        let config = SimulatorConfig::default();
        let url = share_link(&config, "Simulação FGTS\nPrazo: 12 meses").unwrap();

        assert_eq!(url.host_str(), Some("api.whatsapp.com"));
        assert_eq!(url.path(), "/send");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("phone".to_string(), "5511999999999".to_string()));
        assert_eq!(pairs[1], ("text".to_string(), "Simulação FGTS\nPrazo: 12 meses".to_string()));

        // Newlines are encoded a single time
        assert!(url.as_str().contains("%0A"));
        assert!(!url.as_str().contains("%250A"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = SimulatorConfig {
            share_base_url: "not a url".to_string(),
            ..SimulatorConfig::default()
        };
        assert!(share_link(&config, "hi").is_err());
    }
}
