use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{} contains no .json export", .0.display())]
    EmptyArchive(PathBuf),
}
