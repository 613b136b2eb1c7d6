//! Real-time scan events. Payload types live in `payload`, broadcast helpers in `emit`.

pub mod emit;
pub mod payload;
