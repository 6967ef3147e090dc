pub mod calendar;
pub mod city;
pub mod csv_models;
pub mod reports;
pub mod trip;
