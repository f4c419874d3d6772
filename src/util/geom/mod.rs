pub mod angles;
pub use self::angles::*;
