//! Thin wrapper over the MongoDB driver: connection handling, database
//! and collection enumeration, `collStats` and `listIndexes` decoding.

pub mod client;

pub use client::MongoClient;
