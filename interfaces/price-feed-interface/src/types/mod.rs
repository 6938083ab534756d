pub mod round_data;
