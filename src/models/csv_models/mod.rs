pub mod trip_row;
