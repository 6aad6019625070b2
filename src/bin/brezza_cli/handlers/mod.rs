#![deny(clippy::all, clippy::pedantic)]

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod links;
pub mod media;
pub mod posts;
pub mod site;
pub mod tags;
