mod catalog;
mod common;
mod metrics;
