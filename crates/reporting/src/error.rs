use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Could not read from the datastore: {0}")]
    Storage(#[from] datastore::DatastoreError),

    #[error("Could not write to the report sink: {0}")]
    Io(#[from] std::io::Error),
}
