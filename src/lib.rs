pub mod cloner;
pub mod config_xml;
pub mod remote;
pub mod substitution;
pub mod transform;
pub mod urls;
