//! Fixed registry of named control endpoints.

/// A named base URL for a remote controllable bot process.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

/// In-memory endpoint registry, built once at startup and never mutated.
///
/// Lookups are read-only, so the registry can be shared across concurrent
/// message handlers without locking.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// Look up an endpoint by name. Case-insensitive exact match only.
    pub fn find(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Configured names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(|e| e.name.as_str())
    }

    /// Names joined for user-facing output, e.g. `reasoning, assistant`.
    pub fn listing(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EndpointRegistry {
        EndpointRegistry::new(vec![
            Endpoint {
                name: "reasoning".to_string(),
                url: "http://reasoning.example/bot".to_string(),
            },
            Endpoint {
                name: "assistant".to_string(),
                url: "http://assistant.example/bot".to_string(),
            },
        ])
    }

    #[test]
    fn test_find_exact_name() {
        let endpoint = registry().find("reasoning").map(|e| e.url.clone());
        assert_eq!(endpoint.as_deref(), Some("http://reasoning.example/bot"));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = registry();
        let upper = registry.find("REASONING").map(|e| e.name.clone());
        let mixed = registry.find("ReAsOnInG").map(|e| e.name.clone());
        assert_eq!(upper.as_deref(), Some("reasoning"));
        assert_eq!(mixed.as_deref(), Some("reasoning"));
    }

    #[test]
    fn test_find_unregistered_name_is_none() {
        assert!(registry().find("ghost").is_none());
    }

    #[test]
    fn test_find_no_partial_match() {
        assert!(registry().find("reason").is_none());
        assert!(registry().find("reasoning2").is_none());
    }

    #[test]
    fn test_names_in_registration_order() {
        let registry = registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["reasoning", "assistant"]);
    }

    #[test]
    fn test_listing_joins_names() {
        assert_eq!(registry().listing(), "reasoning, assistant");
    }

    #[test]
    fn test_empty_registry() {
        let registry = EndpointRegistry::new(vec![]);
        assert!(registry.find("reasoning").is_none());
        assert_eq!(registry.listing(), "");
    }
}
