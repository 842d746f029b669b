mod get_group_test;
mod helpers;
