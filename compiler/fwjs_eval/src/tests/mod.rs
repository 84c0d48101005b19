//! Test modules kept outside their implementation files.
