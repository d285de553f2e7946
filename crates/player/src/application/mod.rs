//! Application layer - DTOs and use-case services

pub mod dto;
pub mod services;
