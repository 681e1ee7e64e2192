//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from calculation logic:
//! - Color mapping for risk tags and margins

pub mod color_mapping;
