//! Unit tests, mirroring the library module tree.




/// Image parsing and run-loop tests.
pub mod sim;
