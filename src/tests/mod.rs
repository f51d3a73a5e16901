mod division_degeneracy_tests;
mod rust_api_tests;
