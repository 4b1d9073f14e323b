pub mod rae;
