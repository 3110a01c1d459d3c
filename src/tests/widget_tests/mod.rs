mod detail_map_tests;
mod edit_map_tests;
