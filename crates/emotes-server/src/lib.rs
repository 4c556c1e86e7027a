//! Emote finder HTTP server library (router, handlers, UI assets).

pub mod gateway;
