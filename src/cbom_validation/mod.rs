/// CBOM validation core - domain models and the analyzer services
///
/// Everything in this module is pure: documents come in as parsed JSON,
/// messages and statistics come out. File access and report printing live
/// in the adapters layer.
pub mod domain;
pub mod services;
