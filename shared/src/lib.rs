//! # Shared Types and Client Logic
//!
//! This library defines the contract between the refnet web front-end and the
//! membership platform backend, plus the client-side logic that is independent
//! of the DOM: the lazy referral-tree model and the form validation rules.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: login, registration, and session types
//!   - **[`dto::profile`]**: profile aggregate, bank details, earnings
//!   - **[`dto::pin`]**: PIN vouchers and purchasable packages
//!   - **[`dto::withdraw`]**: withdrawal requests and admin review
//!   - **[`dto::network`]**: referral-tree levels
//! - **[`tree`]**: lazy materialization model for the referral network
//! - **[`validate`]**: client-side form guards (the server stays the authority)
//! - **[`utils`]**: currency and date formatting
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. All endpoints except login wrap their
//! payload in the [`dto::ApiEnvelope`] `{response, message, data}` shape;
//! optional fields deserialize as `None` when absent.

pub mod dto;
pub mod tree;
pub mod utils;
pub mod validate;
