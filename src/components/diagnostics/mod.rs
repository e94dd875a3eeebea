mod diagnostics;

pub use diagnostics::Diagnostics;
