//! HTTP API over a small relational store of heroes, powers, and the
//! strength with which each hero holds each power.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod seed;
pub mod validation;
