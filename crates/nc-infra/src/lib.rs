pub mod hashing;
pub mod codec;
pub mod time;

pub use hashing::Blake3Hasher;
pub use codec::PngImageCodec;
pub use time::SystemClock;
