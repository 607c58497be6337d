/// Errors produced while decoding export documents.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not recognised as a Roam/Logseq export: expected an object or an array, found {0}")]
    UnrecognizedShape(&'static str),

    #[error("invalid page: {0}")]
    InvalidPage(#[from] serde_json::Error),
}
