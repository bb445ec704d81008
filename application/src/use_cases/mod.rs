//! Use cases (application services)

pub mod answer_query;
