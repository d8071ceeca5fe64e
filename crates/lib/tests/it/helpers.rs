use nested::{Record, ToRecord, Value, codec};

/// The example document: a deep chain of maps next to a list of maps.
pub const FIXTURE: &str = r#"{
    "hello": {
        "this": {
            "is": {
                "an": {
                    "example": "hi"
                }
            }
        }
    },
    "that": [{"try": "this"}]
}"#;

/// Decode the example document
pub fn fixture() -> Value {
    codec::decode(FIXTURE).expect("fixture is valid JSON")
}

/// Decode arbitrary test JSON, panicking on invalid input
pub fn json(text: &str) -> Value {
    codec::decode(text).unwrap_or_else(|e| panic!("invalid test JSON {text}: {e}"))
}

/// A native structure that opts in to traversal by field name
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub host: String,
    pub port: i64,
    pub tags: Vec<String>,
}

impl ToRecord for Endpoint {
    fn to_record(&self) -> Record {
        Record::new("Endpoint")
            .with("host", self.host.as_str())
            .with("port", self.port)
            .with("tags", self.tags.clone())
    }
}

/// A native structure that nests another record and a decoded document
#[derive(Debug, Clone)]
pub struct Deployment {
    pub name: String,
    pub primary: Endpoint,
    pub replicas: Vec<Endpoint>,
    pub metadata: Value,
}

impl ToRecord for Deployment {
    fn to_record(&self) -> Record {
        Record::new("Deployment")
            .with("name", self.name.as_str())
            .with("primary", Value::from_record(&self.primary))
            .with(
                "replicas",
                self.replicas
                    .iter()
                    .map(Value::from_record)
                    .collect::<Vec<_>>(),
            )
            .with("metadata", self.metadata.clone())
    }
}

/// Build a sample deployment with two replicas
pub fn deployment() -> Deployment {
    let endpoint = |host: &str, port: i64| Endpoint {
        host: host.to_string(),
        port,
        tags: vec!["blue".to_string(), host.to_string()],
    };
    Deployment {
        name: "api".to_string(),
        primary: endpoint("primary.local", 443),
        replicas: vec![endpoint("r1.local", 8443), endpoint("r2.local", 9443)],
        metadata: json(r#"{"labels": {"tier": "web"}, "owners": ["ops"]}"#),
    }
}
