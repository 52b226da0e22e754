#![allow(dead_code)]

mod client;

pub use client::*;
