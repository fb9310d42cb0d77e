pub mod analysis;
pub mod cli;
pub mod conf;
pub mod dataset;
pub mod export;
pub mod ingest;
pub mod logging;

#[cfg(test)]
mod test_support;
