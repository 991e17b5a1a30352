use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Priority heap has no elements")]
    EmptyHeap,
    #[error("Missing path record for node: {0}")]
    MissingRecord(String),
    #[error("Malformed path: {0}")]
    MalformedPath(String),
}
