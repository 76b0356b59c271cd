/// Field extraction and immediate decode/encode round trips.
pub mod decode_properties;
