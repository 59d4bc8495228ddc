//! Core JSON infrastructure for the geotrace toolbox.
//!
//! Telematics exports arrive as schemaless JSON documents, often with further
//! JSON encoded inside string fields. This crate provides the tagged-union
//! value model ([`json::JsonValue`]), a recursive-descent parser with
//! position-annotated errors, and compact/pretty serializers that the rest of
//! the workspace is built on.

pub mod byte_reader;
pub mod json;
