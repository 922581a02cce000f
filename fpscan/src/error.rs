use quick_error::quick_error;
use std::io;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        /// Writing to the output stream failed.
        Io(err: io::Error) {
            from()
            display("failed to write the report: {}", err)
            cause(err)
        }
        /// The product reference check found mismatching pairs.
        Mismatch { count: usize } {
            display("the shift-based product differs from exact rounding on {} pair(s)", count)
        }
    }
}
