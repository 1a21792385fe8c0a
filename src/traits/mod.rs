pub mod codec;
pub mod procedure;
pub mod transport;

pub use codec::{Cipher, Codec};
pub use procedure::{procedure_fn, Arguments, FnProcedure, Procedure, ValueStream, Yielded};
pub use transport::{Delivery, Transport};
