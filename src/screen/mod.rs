//! Core screen logic: the list store, row-action descriptors, and dispatch.

pub mod action;
pub mod dispatch;
pub mod state;
