pub mod contributors;
pub mod identity;
pub mod ingest;
pub mod qualification;
pub mod ranks;
pub mod search;
pub mod status;
pub mod summary;
pub mod tabular;
