pub mod utils;

pub use utils::{
    read_blob, read_length, read_length_with_encoding, skip, skip_binary_double,
    skip_binary_float, skip_blob, skip_blobs, skip_double, skip_millisecond_time,
};
