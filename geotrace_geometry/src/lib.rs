//! Geographic structures of vehicle-telematics event exports.
//!
//! Telematics backends deliver transport events in several container shapes,
//! with travelled paths as `waypoints` lists and venues as nested
//! latitude/longitude pairs. This crate normalizes those containers
//! ([`resolve_events`]), converts events into GeoJSON
//! ([`build_collection`], [`GeoCollection`]), walks arbitrary documents for
//! geographic structures ([`scan_record`], [`GeoFinding`]) and extracts
//! transport-event observations from debug exports ([`extract_row_trips`]).

mod events;
mod geojson;
mod scan;
mod trips;

pub use events::*;
pub use geojson::*;
pub use scan::*;
pub use trips::*;
