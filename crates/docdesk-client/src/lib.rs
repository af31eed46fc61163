//! # docdesk-client
//!
//! [`RestContentApi`] implements [`docdesk_core::traits::ContentApi`] over
//! the content service's public REST API.

pub mod dto;
pub mod rest;

pub use rest::RestContentApi;
