//! Application layer for BizForge.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business
//! logic.

pub mod plan_usecase;

pub use plan_usecase::PlanUseCase;
