mod agents_tests;
mod favorites_tests;
mod mortgage_tests;
mod properties_tests;
