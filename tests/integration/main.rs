mod cli_test;
mod count_test;
