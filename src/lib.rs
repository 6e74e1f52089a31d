// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod persistence;
pub mod server;
pub mod telemetry;
