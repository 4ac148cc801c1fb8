mod record;
mod ser;
mod value;

pub use record::Record;
pub use ser::{ValueError, ValueSerializer, to_value};
pub use value::{Map, Value};
