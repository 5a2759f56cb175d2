pub mod builder;
pub use builder::*;

pub mod category;
pub use category::*;

pub mod explain;
pub use explain::*;

pub mod options;
pub use options::*;

pub mod question;
pub use question::*;
