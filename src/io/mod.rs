//! File input/output: CSV ingest of case counts, CSV/JSON exports of results.

pub mod export;
pub mod ingest;
