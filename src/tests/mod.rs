mod normalizer_tests;
mod utils;
