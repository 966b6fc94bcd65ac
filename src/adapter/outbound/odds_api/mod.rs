//! The Odds API integration (`/v4/sports`, `/v4/sports/{sport}/odds`).

pub mod client;
pub mod dto;

pub use client::OddsApiClient;
