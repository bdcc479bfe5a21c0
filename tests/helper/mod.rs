#![allow(dead_code)]

pub mod sources;

pub use sources::{FakeCatalog, FakeRepository};
