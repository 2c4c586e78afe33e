use serde::{Deserialize, Serialize};

/// Where the blog collection lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Reported to the server in the connection handshake.
    pub app_name: Option<String>,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".into(),
            database: "mydb".into(),
            collection: "blog".into(),
            app_name: Some("blog-server".into()),
        }
    }
}
