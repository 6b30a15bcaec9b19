//! A minimal GL smoke test: one window, one vertex/fragment shader pair,
//! two hard-coded triangles, and a keyboard state tracker. Every GL call is
//! checked against the polled error queue through [`gl_call!`].

pub mod gl_api;
pub mod input;
