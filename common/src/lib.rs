//! Common library shared by the wizard frontend: query model, query string
//! builder, selection state and catalog data.

extern crate serde;


pub mod search_query;
pub mod query_string;
pub mod selection;
pub mod catalog;
pub mod countries;
