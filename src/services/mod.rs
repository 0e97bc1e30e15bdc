use std::fmt;
use std::time::Duration;

pub mod checker;
pub mod probe;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1000);

/// A named TCP endpoint the dev stack depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        ServiceDescriptor {
            name: name.into(),
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// MongoDB, Meilisearch, the vector database and the RAG API, in report order.
pub fn default_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new("MongoDB", "127.0.0.1", 27017),
        ServiceDescriptor::new("Meilisearch", "127.0.0.1", 7700),
        ServiceDescriptor::new("PostgreSQL (VectorDB)", "127.0.0.1", 5432),
        ServiceDescriptor::new("RAG API", "127.0.0.1", 8000),
    ]
}

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub services: Vec<ServiceDescriptor>,
    pub timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            services: default_services(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

#[test]
fn test_default_config() {
    let config = CheckerConfig::default();
    let endpoints: Vec<String> = config.services.iter().map(|s| s.to_string()).collect();

    assert_eq!(
        endpoints,
        vec![
            "127.0.0.1:27017",
            "127.0.0.1:7700",
            "127.0.0.1:5432",
            "127.0.0.1:8000"
        ]
    );
    assert_eq!(config.services[2].name, "PostgreSQL (VectorDB)");
    assert_eq!(config.timeout, Duration::from_millis(1000));
}
