use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed seed data: {source}")]
    Seed {
        #[from]
        source: serde_json::Error,
    },

    #[error("unable to read seed file {path}: {source}")]
    SeedFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
