#![doc = "site-content-core: content resolution for the marketing site."]

//! Everything between the headless content service and the rendered sections:
//! the source contract, field normalizers, view-models, fallbacks, resolvers,
//! the live-update subscription and the stateful section logic (carousels,
//! slideshow, logo ticker).
//!
//! # Usage
//! Build a [`site::Site`] from a [`config::StackConfig`] and any
//! [`contract::ContentSource`], then call the resolvers or page loaders.

pub mod config;
pub mod contract;
pub mod fallback;
pub mod field;
pub mod live;
pub mod model;
pub mod page;
pub mod resolve;
pub mod section;
pub mod site;
