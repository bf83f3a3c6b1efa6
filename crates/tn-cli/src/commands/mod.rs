//! Command implementations for the Tenantry CLI

pub mod common;
pub mod entity;
pub mod init;
pub mod ls;
