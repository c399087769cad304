mod property_roundtrip;
mod serde_compat;
