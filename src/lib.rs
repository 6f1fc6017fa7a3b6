// Library for tests to access modules

pub mod classify;
pub mod config;
pub mod models;
pub mod probe;
pub mod rate;
pub mod report;
pub mod sampler;
pub mod threshold;
pub mod version;
