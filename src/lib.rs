pub mod commands;
pub mod error;
pub mod http;
pub mod index;
pub mod package;
pub mod pkgbuild;
pub mod runtime;
