//! Entity to model mappers
//!
//! Conversions between database models and domain entities
//! (`From<Model> for Entity`). Identifiers coming out of the database are
//! trusted; external input is validated at the edges instead.

mod category;
mod post;
mod reply;
mod user;
