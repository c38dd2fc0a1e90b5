//! Stateless services computing derived reads over a snapshot.

pub mod services;
