//! Network boundary: the contact form's one-shot submission call.

pub mod api;
