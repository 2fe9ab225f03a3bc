//! インターフェース層

pub mod web;
